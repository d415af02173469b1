//! Scanner implementation, organized by token shape.
//!
//! - [`core`] - the [`Lexer`] struct, skip-then-dispatch entry point,
//!   and the `Iterator` impl
//! - [`comment`] - whitespace and `*` comment skipping
//! - [`identifier`] - identifiers and keywords
//! - [`number`] - integer literals
//! - [`string`] - string literals
//! - [`operator`] - assignment operators

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
