use std::fmt;

use crate::expression::ast::ExpressionNode;
use crate::expression::operator::Operator;

fn precedence(expr: &ExpressionNode) -> u8 {
    match expr {
        ExpressionNode::Binary {
            operator: Operator::Add | Operator::Sub,
            ..
        } => 1,
        ExpressionNode::Binary {
            operator: Operator::Mul | Operator::Div,
            ..
        } => 2,
        ExpressionNode::Number(_) => 3,
    }
}

/// Renders infix notation with the fewest parentheses that still parse back
/// into the same tree. Tokens are separated by single spaces.
impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &ExpressionNode,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "( ")?;
                fmt_expression(f, expr)?;
                write!(f, " )")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &ExpressionNode) -> fmt::Result {
            match expr {
                ExpressionNode::Number(n) => write!(f, "{}", n),
                ExpressionNode::Binary { operator, operands } => match operands.as_slice() {
                    [l, r] => {
                        let p = precedence(expr);
                        write_with_parens(f, l, precedence(l) < p)?;
                        write!(f, " {} ", operator)?;
                        // left-associative parsing: an equal-precedence right operand needs grouping
                        write_with_parens(f, r, precedence(r) <= p)
                    }
                    other => {
                        write!(f, "(")?;
                        for (i, operand) in other.iter().enumerate() {
                            if i > 0 {
                                write!(f, " {}", operator)?;
                            }
                            write!(f, " ")?;
                            fmt_expression(f, operand)?;
                        }
                        write!(f, " )")
                    }
                },
            }
        }

        fmt_expression(f, self)
    }
}

impl ExpressionNode {
    /// Render the tree in prefix (Polish) notation, e.g. `+ 1 * 2 3`
    pub fn to_prefix(&self) -> String {
        fn fmt(expr: &ExpressionNode, out: &mut Vec<String>) {
            match expr {
                ExpressionNode::Number(n) => out.push(n.to_string()),
                ExpressionNode::Binary { operator, operands } => {
                    out.push(operator.to_string());
                    for operand in operands {
                        fmt(operand, out);
                    }
                }
            }
        }

        let mut parts = Vec::new();
        fmt(self, &mut parts);
        parts.join(" ")
    }
}
