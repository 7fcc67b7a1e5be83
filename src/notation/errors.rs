use thiserror::Error;

use crate::expression::ExpressionError;
use crate::parser::ParseError;

/// Any failure while turning text into a number
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Expression(#[from] ExpressionError),
    #[error("unsupported notation: {0}")]
    UnsupportedNotation(String),
}
