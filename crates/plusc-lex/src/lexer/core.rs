//! Core scanner: the [`Lexer`] struct and token dispatch.

use crate::cursor::Cursor;
use crate::error::ScanError;
use crate::pos::Pos;
use crate::token::{is_ident_start, Token, TokenKind};

/// Scanner for Plus source text.
///
/// The lexer turns source text into a stream of [`Token`]s in a single
/// pass. Each call to [`next_token`](Lexer::next_token) skips whitespace
/// and comments, then classifies exactly one token. The stream always
/// ends with a token of kind [`TokenKind::EndOfInput`]; lexical errors
/// are reported as tokens of kind [`TokenKind::Error`] and the lexer
/// stays usable afterwards.
///
/// `Lexer` also implements `Iterator`, yielding every token before the
/// end-of-input sentinel.
///
/// # Example
///
/// ```
/// use plusc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("number x;");
/// let token = lexer.next_token();
/// assert_eq!(token.kind(), TokenKind::Keyword);
/// assert_eq!(token.value(), "number");
/// ```
pub struct Lexer<'a> {
    /// Character cursor over the source text.
    pub(crate) cursor: Cursor<'a>,

    /// Position of the first character of the token being scanned.
    pub(crate) token_start: Pos,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: Pos::new(1, 0),
        }
    }

    /// Returns the next token from the source text.
    ///
    /// Skips whitespace and comments, then dispatches on the first
    /// significant character to the matching scan routine. Every call
    /// consumes at least one character unless input is exhausted, so
    /// repeated calls always reach [`TokenKind::EndOfInput`].
    pub fn next_token(&mut self) -> Token {
        // An unterminated comment is reported where skipping began.
        let skip_start = self.cursor.pos();
        if let Err(error) = self.skip_whitespace_and_comments() {
            return Token::error(error, skip_start);
        }

        self.token_start = self.cursor.pos();

        if self.cursor.is_at_end() {
            return Token::end_of_input(self.token_start);
        }

        match self.cursor.current_char() {
            '{' => {
                self.cursor.advance();
                Token::new(TokenKind::OpenBlock, "{", self.token_start)
            },
            '}' => {
                self.cursor.advance();
                Token::new(TokenKind::CloseBlock, "}", self.token_start)
            },
            ';' => {
                self.cursor.advance();
                Token::new(TokenKind::EndOfLine, ";", self.token_start)
            },
            '"' => self.lex_string(),
            ':' | '+' => self.lex_operator(),
            // A '-' starts the operator '-=' only when '=' follows;
            // otherwise it belongs to a number literal.
            '-' => {
                if self.cursor.peek_char(1) == '=' {
                    self.lex_operator()
                } else {
                    self.lex_number()
                }
            },
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            c => {
                self.cursor.advance();
                Token::error(ScanError::UnrecognizedChar(c), self.token_start)
            },
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields tokens up to, but not including, the end-of-input
    /// sentinel. Error tokens are yielded like any other.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind() == TokenKind::EndOfInput {
            None
        } else {
            Some(token)
        }
    }
}
