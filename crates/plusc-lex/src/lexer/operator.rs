//! Assignment operator scanning.

use crate::error::ScanError;
use crate::token::{is_operator, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans an assignment operator: `:=`, `+=` or `-=`.
    ///
    /// Consumes the leading character, then a following `=` when
    /// present. Anything else is an invalid operator; the character
    /// after the rejected one stays unconsumed.
    pub(crate) fn lex_operator(&mut self) -> Token {
        let mut op = String::new();
        op.push(self.cursor.current_char());
        self.cursor.advance();

        if self.cursor.match_char('=') {
            op.push('=');
        }

        if is_operator(&op) {
            Token::new(TokenKind::Operator, op, self.token_start)
        } else {
            Token::error(ScanError::InvalidOperator(op), self.token_start)
        }
    }
}

// ==================== TESTS ====================
