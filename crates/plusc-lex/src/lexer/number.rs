//! Integer literal scanning.

use crate::error::ScanError;
use crate::token::{Token, TokenKind, MAX_TOKEN_LEN};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans an integer literal, possibly with a leading `-`.
    ///
    /// A `-` must be followed by at least one digit. Digits are
    /// consumed greedily, with the leading `-` counting toward the
    /// [`MAX_TOKEN_LEN`] cap. A `.` immediately after the digits is
    /// rejected: Plus has no floating point literals. The `.` itself
    /// stays unconsumed.
    pub(crate) fn lex_number(&mut self) -> Token {
        let mut text = String::new();

        if self.cursor.current_char() == '-' {
            text.push('-');
            self.cursor.advance();
            if !self.cursor.current_char().is_ascii_digit() {
                // Reported at the point of failure, just past the '-'.
                return Token::error(ScanError::InvalidNumber, self.cursor.pos());
            }
        }

        while self.cursor.current_char().is_ascii_digit() && text.len() < MAX_TOKEN_LEN {
            text.push(self.cursor.current_char());
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' {
            return Token::error(ScanError::FloatNotAllowed, self.token_start);
        }

        Token::new(TokenKind::IntConstant, text, self.token_start)
    }
}

// ==================== TESTS ====================
