use std::fmt;

use crate::expression::errors::ExpressionError;

/// The four supported binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Apply the operator to already evaluated operands.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when dividing by exactly `0.0`.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, ExpressionError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                // exact comparison, -0.0 is zero as well
                if right == 0.0 {
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = ExpressionError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            other => Err(ExpressionError::UnsupportedOperator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
