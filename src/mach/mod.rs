/*!
## Rust Machine Module

This Rust module is the interpreter for BASIC. It walks the program text
through a [`Cursor`](../lang/struct.Cursor.html), evaluating expressions
while parsing them and executing one numbered line per call.

*/

mod config;
mod expression;
mod host;
mod index;
mod operation;
mod runtime;
mod stack;
mod statement;
mod var;

pub use config::Config;
pub use host::Host;
pub use index::LineIndex;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::ForLoop;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Var;

#[cfg(test)]
mod tests;
