use crate::expression::operator::Operator;

/// A node of an arithmetic expression tree.
///
/// Every `Binary` node built through [`ExpressionNode::binary`] holds exactly
/// two operands, first operand first. The field stays public so that callers
/// assembling trees by hand get a [`MalformedNode`] error on evaluation
/// instead of a panic.
///
/// [`MalformedNode`]: crate::expression::ExpressionError::MalformedNode
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
    Number(f64),
    Binary {
        operator: Operator,
        operands: Vec<ExpressionNode>,
    },
}

impl ExpressionNode {
    pub fn number(value: f64) -> Self {
        ExpressionNode::Number(value)
    }

    pub fn binary(operator: Operator, left: ExpressionNode, right: ExpressionNode) -> Self {
        ExpressionNode::Binary {
            operator,
            operands: vec![left, right],
        }
    }

    /// Depth of the tree, a single number has depth 1
    pub fn depth(&self) -> usize {
        match self {
            ExpressionNode::Number(_) => 1,
            ExpressionNode::Binary { operands, .. } => {
                1 + operands.iter().map(Self::depth).max().unwrap_or(0)
            }
        }
    }
}
