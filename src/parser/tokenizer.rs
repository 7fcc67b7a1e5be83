use std::fmt;

use log::{debug, warn};

use crate::expression::Operator;
use crate::parser::errors::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    Open,
    Close,
}

/// A single whitespace-delimited unit of an expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    Paren(Paren),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Paren(Paren::Open) => write!(f, "("),
            Token::Paren(Paren::Close) => write!(f, ")"),
        }
    }
}

/// Split `text` on whitespace and classify every field.
///
/// Operators and parentheses must stand alone, `(1` is rejected as a number.
/// Numbers use the literal grammar of [`f64`]'s `FromStr`, so `-2`, `1e3`
/// and `inf` are all accepted.
///
/// # Errors
///
/// Returns [`ParseError::InvalidNumber`] naming the first field that is
/// neither an operator, a parenthesis nor a number.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let tokens = text
        .split_whitespace()
        .map(classify)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Tokenized '{}' into {} tokens", text.trim(), tokens.len());
    Ok(tokens)
}

fn classify(field: &str) -> Result<Token, ParseError> {
    let mut chars = field.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Ok(op) = Operator::try_from(c) {
            return Ok(Token::Operator(op));
        }
        match c {
            '(' => return Ok(Token::Paren(Paren::Open)),
            ')' => return Ok(Token::Paren(Paren::Close)),
            _ => {}
        }
    }

    let reject = |reason: String| {
        warn!("Rejecting token '{}': {}", field, reason);
        ParseError::InvalidNumber {
            token: field.to_string(),
            reason,
        }
    };

    let value = field.parse::<f64>().map_err(|e| reject(e.to_string()))?;
    // finite literals too large for a double overflow to infinity
    if value.is_infinite() && !spells_infinity(field) {
        return Err(reject("value out of range".to_string()));
    }
    Ok(Token::Number(value))
}

fn spells_infinity(field: &str) -> bool {
    let unsigned = field.strip_prefix(['+', '-']).unwrap_or(field);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
