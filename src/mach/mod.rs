/*!
## Machine Module

The Applesoft runtime: values, the recursive-descent expression
evaluator, and the interpreter that owns all program state.

*/

mod eval;
mod interp;
mod io;
mod val;

pub use eval::evaluate;
pub use eval::Context;
pub use interp::Interpreter;
pub use interp::MEMORY_SIZE;
pub use io::{Disk, LineReader, Screen};
pub use val::Val;

#[cfg(test)]
mod tests;
