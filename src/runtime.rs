mod builtin;
mod check;
mod eval;
mod value;

pub use builtin::{lookup, BinaryFn, Operator, OPERATORS};
pub use check::check;
pub use eval::Interpreter;
pub use value::{Context, Value};
