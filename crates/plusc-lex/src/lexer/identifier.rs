//! Identifier and keyword scanning.

use crate::error::ScanError;
use crate::token::{is_ident_continue, is_keyword, Token, TokenKind, MAX_IDENT_LEN, MAX_TOKEN_LEN};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans an identifier or keyword.
    ///
    /// Consumes letters, digits and underscores, collecting at most
    /// [`MAX_TOKEN_LEN`] characters. Text longer than [`MAX_IDENT_LEN`]
    /// characters is an error; the offending characters stay consumed.
    /// Text that exactly matches a reserved word becomes a `Keyword`
    /// token, anything else an `Identifier`.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let mut text = String::new();

        // Identifier characters are ASCII, so len() counts characters.
        while is_ident_continue(self.cursor.current_char()) && text.len() < MAX_TOKEN_LEN {
            text.push(self.cursor.current_char());
            self.cursor.advance();
        }

        if text.len() > MAX_IDENT_LEN {
            return Token::error(ScanError::IdentifierTooLong, self.token_start);
        }

        if is_keyword(&text) {
            Token::new(TokenKind::Keyword, text, self.token_start)
        } else {
            Token::new(TokenKind::Identifier, text, self.token_start)
        }
    }
}

// ==================== TESTS ====================
