//! Source positions for tokens and diagnostics.
//!
//! A [`Pos`] names the line and column of a single character in Plus
//! source text. Lines are 1-based; columns are 0-based, counting the
//! characters that precede the position on its line.

use std::fmt;

/// The line/column coordinate of a character in Plus source text.
///
/// Every token records the position of its first character. Lines start
/// at 1; columns start at 0, so a character's column is the number of
/// characters before it on the same line.
///
/// # Example
///
/// ```
/// use plusc_lex::Pos;
///
/// let pos = Pos::new(2, 0);
/// assert_eq!(pos.to_string(), "line 2, column 0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    /// Line number (1-based).
    pub line: u32,

    /// Column number (0-based, in characters).
    pub col: u32,
}

impl Pos {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

// ==================== TESTS ====================
