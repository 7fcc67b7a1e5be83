mod core;
mod errors;

pub use core::{Notation, evaluate, evaluate_all, evaluate_infix, evaluate_prefix};
pub use errors::CalcError;
