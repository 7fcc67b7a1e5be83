use std::fmt;

use thiserror::Error;

use crate::expression::operator::Operator;

/// Which operand of a binary node failed to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandPosition {
    First,
    Second,
}

impl fmt::Display for OperandPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OperandPosition::First => write!(f, "first"),
            OperandPosition::Second => write!(f, "second"),
        }
    }
}

/// Errors that can occur during expression evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("operator {operator}: unexpected number of operands: {operands}")]
    MalformedNode { operator: Operator, operands: usize },
    #[error("operator {operator}: failed to evaluate {position} operand: {source}")]
    Operand {
        operator: Operator,
        position: OperandPosition,
        #[source]
        source: Box<ExpressionError>,
    },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(char),
}

impl ExpressionError {
    /// The innermost error, with every operand wrapper removed
    pub fn root_cause(&self) -> &ExpressionError {
        let mut current = self;
        while let ExpressionError::Operand { source, .. } = current {
            current = source;
        }
        current
    }

    /// Operand positions from the root of the tree down to the failing node
    pub fn operand_path(&self) -> Vec<OperandPosition> {
        let mut path = Vec::new();
        let mut current = self;
        while let ExpressionError::Operand {
            position, source, ..
        } = current
        {
            path.push(*position);
            current = source;
        }
        path
    }
}
