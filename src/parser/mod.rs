//! Tokenizer and the two notation parsers

mod errors;
mod infix;
mod prefix;
mod tokenizer;

pub use errors::ParseError;
pub use infix::{InfixParser, priority_of};
pub use prefix::PrefixParser;
pub use tokenizer::{Paren, Token, tokenize};

use crate::expression::ExpressionNode;

/// Turns source text into an expression tree
pub trait Parse {
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first problem found in `text`.
    fn parse(&self, text: &str) -> Result<ExpressionNode, ParseError>;
}
