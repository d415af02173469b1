//! Lexical error definitions.
//!
//! Every way a scan can fail is enumerated here. The scanner never
//! aborts on an error: the rendered message becomes the value of a
//! token with kind [`TokenKind::Error`](crate::TokenKind::Error) and
//! scanning continues after the offending text.

use thiserror::Error;

use crate::token::MAX_IDENT_LEN;

/// A lexical error detected while scanning Plus source text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// A `*` comment was still open when input ended.
    #[error("unterminated comment")]
    UnterminatedComment,

    /// An identifier longer than [`MAX_IDENT_LEN`] characters.
    #[error("identifier too long (max {} characters)", MAX_IDENT_LEN)]
    IdentifierTooLong,

    /// A `-` that was not followed by a digit.
    #[error("invalid number format")]
    InvalidNumber,

    /// A digit run immediately followed by `.`.
    #[error("floating point literals are not allowed")]
    FloatNotAllowed,

    /// A string literal not closed before a newline or end of input, or
    /// longer than [`MAX_STRING_LEN`](crate::MAX_STRING_LEN) characters.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A `:`, `+` or `-` that did not form a recognized operator.
    #[error("invalid operator '{0}'")]
    InvalidOperator(String),

    /// A character no token shape accepts.
    #[error("unrecognized character '{0}'")]
    UnrecognizedChar(char),
}

// ==================== TESTS ====================
