//! Token definitions for the Plus language.
//!
//! This module defines the token categories produced by the scanner,
//! the keyword and operator vocabularies, and the length caps that are
//! part of the language contract.

use std::fmt;

use crate::error::ScanError;
use crate::pos::Pos;

// ==================== LANGUAGE VOCABULARY ====================

/// The reserved words of Plus, matched case-sensitively.
pub const KEYWORDS: &[&str] = &["number", "write", "and", "newline", "repeat", "times"];

/// The assignment operators of Plus.
pub const OPERATORS: &[&str] = &[":=", "+=", "-="];

/// Maximum length of an identifier, in characters.
pub const MAX_IDENT_LEN: usize = 20;

/// Maximum number of characters collected into a single token.
pub const MAX_TOKEN_LEN: usize = 100;

/// Maximum length of a string literal payload, in characters.
pub const MAX_STRING_LEN: usize = 1024;

/// Returns true if `text` exactly matches a Plus keyword.
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

/// Returns true if `text` exactly matches a Plus operator.
pub fn is_operator(text: &str) -> bool {
    OPERATORS.contains(&text)
}

/// Returns true if `c` can start an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// ==================== TOKEN KIND ====================

/// The classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A reserved word, e.g. `number` or `repeat`.
    Keyword,
    /// A user-defined name.
    Identifier,
    /// The statement terminator `;`.
    EndOfLine,
    /// An assignment operator: `:=`, `+=` or `-=`.
    Operator,
    /// An integer literal, possibly negative.
    IntConstant,
    /// A double-quoted string literal.
    StringConstant,
    /// The block opener `{`.
    OpenBlock,
    /// The block closer `}`.
    CloseBlock,
    /// A lexical error; the token value holds the diagnostic.
    Error,
    /// The end-of-input sentinel that terminates every token stream.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::EndOfLine => "EndOfLine",
            TokenKind::Operator => "Operator",
            TokenKind::IntConstant => "IntConstant",
            TokenKind::StringConstant => "StringConstant",
            TokenKind::OpenBlock => "OpenBlock",
            TokenKind::CloseBlock => "CloseBlock",
            TokenKind::Error => "Error",
            TokenKind::EndOfInput => "EndOfInput",
        };
        f.write_str(name)
    }
}

// ==================== TOKEN ====================

/// A single classified token with its source position.
///
/// The value is the token's text as it appeared in the source, except
/// for string constants (quotes stripped), errors (the diagnostic
/// message) and the end-of-input sentinel (the fixed text `EOF`).
///
/// # Example
///
/// ```
/// use plusc_lex::{Lexer, TokenKind};
///
/// let token = Lexer::new("repeat").next_token();
/// assert_eq!(token.kind(), TokenKind::Keyword);
/// assert_eq!(token.value(), "repeat");
/// assert_eq!(token.to_string(), "Keyword(repeat)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token classification.
    kind: TokenKind,

    /// Token text payload.
    value: String,

    /// Position of the token's first character.
    pos: Pos,
}

impl Token {
    /// Creates a token of the given kind.
    pub fn new(kind: TokenKind, value: impl Into<String>, pos: Pos) -> Self {
        Self {
            kind,
            value: value.into(),
            pos,
        }
    }

    /// Creates an error token carrying the diagnostic for `error`.
    pub fn error(error: ScanError, pos: Pos) -> Self {
        Self {
            kind: TokenKind::Error,
            value: error.to_string(),
            pos,
        }
    }

    /// Creates the end-of-input sentinel token.
    pub fn end_of_input(pos: Pos) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            value: String::from("EOF"),
            pos,
        }
    }

    /// The token's classification.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's text payload (the diagnostic for error tokens).
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The position of the token's first character.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// The 1-based line of the token's first character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.pos.line
    }

    /// The 0-based column of the token's first character.
    #[inline]
    pub fn col(&self) -> u32 {
        self.pos.col
    }
}

impl fmt::Display for Token {
    /// Renders the token as `Kind(value)`, the line format of token
    /// files. String constant values are double-quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::StringConstant {
            write!(f, "{}(\"{}\")", self.kind, self.value)
        } else {
            write!(f, "{}({})", self.kind, self.value)
        }
    }
}

// ==================== TESTS ====================
