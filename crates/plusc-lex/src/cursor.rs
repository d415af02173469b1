//! Character cursor for source traversal.
//!
//! [`Cursor`] walks source text one character at a time while tracking
//! the line and column of the character it currently points at. All of
//! the scanner's position reporting comes from this bookkeeping.

use crate::pos::Pos;

/// A cursor over source text with line/column bookkeeping.
///
/// The cursor points at one character at a time; [`advance`](Cursor::advance)
/// consumes it and moves to the next. Consuming a newline moves the
/// position to the start of the next line; consuming anything else moves
/// one column right. At end of input the current character is the NUL
/// sentinel `'\0'`.
///
/// # Example
///
/// ```
/// use plusc_lex::Cursor;
///
/// let mut cursor = Cursor::new("x := 1;");
/// assert_eq!(cursor.current_char(), 'x');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ' ');
/// assert_eq!(cursor.column(), 1);
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (0-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 0,
        }
    }

    /// Returns the character the cursor points at, or `'\0'` at end of
    /// input.
    #[inline]
    pub fn current_char(&self) -> char {
        if self.position >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let byte = self.source.as_bytes()[self.position];
        if byte < 128 {
            return byte as char;
        }

        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Returns the character `offset` characters past the current one,
    /// or `'\0'` when that runs off the end of the source.
    pub fn peek_char(&self, offset: usize) -> char {
        self.source[self.position..].chars().nth(offset).unwrap_or('\0')
    }

    /// Consumes the current character, updating line and column
    /// tracking. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        // Fast path for ASCII (most common case)
        let byte = self.source.as_bytes()[self.position];
        if byte < 128 {
            self.position += 1;
            if byte == b'\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
            return;
        }

        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            // A non-ASCII character is never a newline.
            self.column += 1;
        }
    }

    /// Consumes the current character if it equals `expected`. Returns
    /// true if a character was consumed.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (0-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the position of the character the cursor points at.
    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.line, self.column)
    }
}

// ==================== TESTS ====================
