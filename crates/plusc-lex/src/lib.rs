//! plusc-lex - Lexical Analyzer for the Plus Programming Language
//!
//! This crate provides the scanner for Plus, a small instructional
//! language. It transforms source text into a stream of classified
//! tokens in a single pass, each token carrying its text and the
//! line/column of its first character.
//!
//! # Overview
//!
//! Tokens are pulled one at a time with [`Lexer::next_token`], or via
//! the `Iterator` impl. The stream always ends with a token of kind
//! [`TokenKind::EndOfInput`]. A lexical error does not stop the scan:
//! it is reported as a token of kind [`TokenKind::Error`] whose value
//! is the diagnostic message, and the lexer stays usable afterwards.
//! What to do with an error token is the caller's policy.
//!
//! # Example Usage
//!
//! ```
//! use plusc_lex::Lexer;
//!
//! let source = "number count;\ncount := 10;";
//!
//! for token in Lexer::new(source) {
//!     println!("{}", token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions, the keyword and
//!   operator vocabularies, and the length caps
//! - [`error`] - Lexical error taxonomy
//! - [`lexer`] - The scanner implementation
//! - [`cursor`] - Character cursor with line/column bookkeeping
//! - [`pos`] - Source positions
//!
//! # Token Categories
//!
//! ## Keywords
//! `number`, `write`, `and`, `newline`, `repeat`, `times`
//!
//! ## Identifiers
//! A letter or underscore followed by letters, digits and underscores,
//! at most 20 characters.
//!
//! ## Literals
//! - Integer: `42`, `-7` (no floating point)
//! - String: `"hello"` (one line, no escape sequences)
//!
//! ## Operators
//! `:=`, `+=`, `-=`
//!
//! ## Delimiters
//! `{`, `}` and the statement terminator `;`
//!
//! ## Special
//! - `EndOfInput` - end of input marker
//! - `Error` - a lexical error carrying its diagnostic

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod pos;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::ScanError;
pub use lexer::Lexer;
pub use pos::Pos;
pub use token::{
    is_ident_continue, is_ident_start, is_keyword, is_operator, Token, TokenKind, KEYWORDS,
    MAX_IDENT_LEN, MAX_STRING_LEN, MAX_TOKEN_LEN, OPERATORS,
};

// ==================== TESTS ====================
