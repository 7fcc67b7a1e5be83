use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::ExpressionNode;
use crate::notation::errors::CalcError;
use crate::parser::{InfixParser, Parse, PrefixParser};

/// Supported expression notations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    #[default]
    Infix,
    Prefix,
}

impl Notation {
    pub fn name(self) -> &'static str {
        match self {
            Notation::Infix => "infix",
            Notation::Prefix => "prefix",
        }
    }

    pub fn parser(self) -> &'static dyn Parse {
        match self {
            Notation::Infix => &InfixParser,
            Notation::Prefix => &PrefixParser,
        }
    }

    /// # Errors
    ///
    /// Returns the parse error of the selected parser.
    pub fn parse(self, text: &str) -> Result<ExpressionNode, CalcError> {
        Ok(self.parser().parse(text)?)
    }

    /// Parse `text` in this notation and evaluate it.
    ///
    /// # Errors
    ///
    /// Returns the first parse or evaluation error, unchanged.
    pub fn evaluate(self, text: &str) -> Result<f64, CalcError> {
        let expr = self.parse(text)?;
        let value = expr.evaluate()?;
        debug!("{} '{}' = {}", self, text.trim(), value);
        Ok(value)
    }
}

impl FromStr for Notation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "infix" => Ok(Notation::Infix),
            "prefix" => Ok(Notation::Prefix),
            other => Err(CalcError::UnsupportedNotation(other.to_string())),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// # Errors
///
/// Returns the first parse or evaluation error.
pub fn evaluate_infix(text: &str) -> Result<f64, CalcError> {
    Notation::Infix.evaluate(text)
}

/// # Errors
///
/// Returns the first parse or evaluation error.
pub fn evaluate_prefix(text: &str) -> Result<f64, CalcError> {
    Notation::Prefix.evaluate(text)
}

/// Evaluate `text` in the notation called `notation` (`infix` or `prefix`)
///
/// # Errors
///
/// Returns [`CalcError::UnsupportedNotation`] for unknown notation names,
/// otherwise the first parse or evaluation error.
pub fn evaluate(text: &str, notation: &str) -> Result<f64, CalcError> {
    notation.parse::<Notation>()?.evaluate(text)
}

/// Evaluate independent expressions in parallel, results keep input order
pub fn evaluate_all<S>(expressions: &[S], notation: Notation) -> Vec<Result<f64, CalcError>>
where
    S: AsRef<str> + Sync,
{
    info!(
        "Evaluating {} {} expressions in parallel",
        expressions.len(),
        notation
    );
    expressions
        .par_iter()
        .map(|text| notation.evaluate(text.as_ref()))
        .collect()
}
