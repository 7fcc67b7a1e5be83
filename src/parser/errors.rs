use thiserror::Error;

use crate::expression::Operator;

/// Errors that can occur while tokenizing or parsing an expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("failed to parse token as number {token}: {reason}")]
    InvalidNumber { token: String, reason: String },
    #[error("no priority defined for operator: {0}")]
    InvalidOperatorPriority(char),
    #[error("not enough operands to build binary expression (op = {operator}, available = {available})")]
    InsufficientOperands { operator: Operator, available: usize },
    #[error("unmatched parenthesis")]
    UnmatchedParenthesis,
    #[error("invalid expression string: evaluated to {0} final expressions")]
    MalformedExpression(usize),
    #[error("unsupported token: {0}")]
    UnsupportedToken(String),
}
