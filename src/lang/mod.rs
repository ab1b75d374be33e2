/*!
# Rust Language Module

This Rust module provides lexical analysis of the BASIC language.
Tokens are classified on demand by a [`Cursor`](struct.Cursor.html)
walking the program text; there is no token buffer.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use lex::lex;
pub use lex::Cursor;

/// Scalar type of every BASIC value.
pub type Value = i32;

/// Line numbers have at most six decimal digits.
pub type LineNumber = u32;

/// Byte range into the program text.
pub type Column = std::ops::Range<usize>;
