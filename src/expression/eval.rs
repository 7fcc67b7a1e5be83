use log::debug;

use crate::expression::ast::ExpressionNode;
use crate::expression::errors::{ExpressionError, OperandPosition};
use crate::expression::operator::Operator;

impl ExpressionNode {
    /// Evaluates the tree recursively, first operand before second.
    ///
    /// Recursion depth follows the depth of the tree and is not limited, so a
    /// pathologically deep tree can exhaust the thread stack.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - a binary node does not have exactly two operands
    /// - a divisor evaluates to exactly zero
    ///
    /// Failures below the root are wrapped in [`ExpressionError::Operand`]
    /// naming the operand that failed. The second operand is never evaluated
    /// if the first one fails.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let result = match self {
            ExpressionNode::Number(n) => Ok(*n),
            ExpressionNode::Binary { operator, operands } => {
                evaluate_operands(*operator, operands)
                    .and_then(|(left, right)| operator.apply(left, right))
            }
        };

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }
}

fn evaluate_operands(
    operator: Operator,
    operands: &[ExpressionNode],
) -> Result<(f64, f64), ExpressionError> {
    let [first, second] = operands else {
        return Err(ExpressionError::MalformedNode {
            operator,
            operands: operands.len(),
        });
    };

    let wrap = move |position: OperandPosition| {
        move |source: ExpressionError| ExpressionError::Operand {
            operator,
            position,
            source: Box::new(source),
        }
    };

    let left = first.evaluate().map_err(wrap(OperandPosition::First))?;
    let right = second.evaluate().map_err(wrap(OperandPosition::Second))?;
    Ok((left, right))
}
