//! Whitespace and comment skipping.
//!
//! Comments in Plus open and close with a single `*` and do not nest.
//! They may span lines and are fully transparent: no token carries any
//! trace of skipped text beyond the positions of its neighbors.

use crate::error::ScanError;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and `*` comments before the next token.
    ///
    /// Whitespace includes newlines; a physical line break never
    /// produces a token. Alternating runs of whitespace and comments
    /// are consumed until a significant character or end of input.
    /// Returns an error if input ends inside an open comment.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> Result<(), ScanError> {
        loop {
            while !self.cursor.is_at_end() && self.cursor.current_char().is_whitespace() {
                self.cursor.advance();
            }

            if self.cursor.current_char() != '*' {
                return Ok(());
            }

            // Opening '*': consume through the closing '*'.
            self.cursor.advance();
            if !self.skip_comment_body() {
                return Err(ScanError::UnterminatedComment);
            }
        }
    }

    /// Consumes characters up to and including the next `*`. Returns
    /// false if input ends first.
    fn skip_comment_body(&mut self) -> bool {
        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' {
                self.cursor.advance();
                return true;
            }
            self.cursor.advance();
        }
        false
    }
}

// ==================== TESTS ====================
