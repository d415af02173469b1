//! String literal scanning.

use crate::error::ScanError;
use crate::token::{Token, TokenKind, MAX_STRING_LEN};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a double-quoted string literal.
    ///
    /// The quotes are not part of the token value and no escape
    /// sequences are processed. A string must close on the line it
    /// opened: a newline, end of input, or a payload longer than
    /// [`MAX_STRING_LEN`] characters makes it unterminated.
    pub(crate) fn lex_string(&mut self) -> Token {
        // Opening quote.
        self.cursor.advance();

        let mut value = String::new();
        let mut len = 0;
        while len < MAX_STRING_LEN {
            let c = self.cursor.current_char();
            if c == '"' || c == '\n' || self.cursor.is_at_end() {
                break;
            }
            value.push(c);
            len += 1;
            self.cursor.advance();
        }

        if !self.cursor.match_char('"') {
            return Token::error(ScanError::UnterminatedString, self.token_start);
        }

        Token::new(TokenKind::StringConstant, value, self.token_start)
    }
}

// ==================== TESTS ====================
