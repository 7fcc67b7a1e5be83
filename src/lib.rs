//! Notacalc - evaluate arithmetic expressions in infix or prefix notation
//!
//! Expressions are whitespace-separated tokens over `+ - * /`, parentheses
//! (infix only) and floating-point literals. Text is tokenized, parsed into
//! an [`ExpressionNode`] tree and evaluated with IEEE double semantics.
//!
//! ```
//! use notacalc::{evaluate, evaluate_infix, evaluate_prefix};
//!
//! assert_eq!(evaluate_infix("2 + 2 * 2").ok(), Some(6.0));
//! assert_eq!(evaluate_prefix("- / 10 + 1 1 * 1 2").ok(), Some(3.0));
//! assert!(evaluate("1 + 2", "postfix").is_err());
//! ```

pub mod expression;
pub mod notation;
pub mod parser;
pub mod service;

// Re-export the main public API
pub use expression::{ExpressionError, ExpressionNode, OperandPosition, Operator};
pub use notation::{CalcError, Notation, evaluate, evaluate_all, evaluate_infix, evaluate_prefix};
pub use parser::{InfixParser, Parse, ParseError, PrefixParser, Token, tokenize};
