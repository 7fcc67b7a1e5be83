//! Expression tree, operator kinds, evaluation and rendering

mod ast;
mod display;
mod errors;
mod eval;
mod operator;

pub use ast::ExpressionNode;
pub use errors::{ExpressionError, OperandPosition};
pub use operator::Operator;
