//! Edge case tests for plusc-lex
//!
//! Boundary conditions, position reporting, and error recovery cases
//! that the per-module tests do not cover.

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    // ==================== EMPTY AND BLANK INPUT ====================

    #[test]
    fn test_empty_source() {
        let token = Lexer::new("").next_token();
        assert_eq!(token.kind(), TokenKind::EndOfInput);
        assert_eq!(token.value(), "EOF");
        assert_eq!(token.line(), 1);
        assert_eq!(token.col(), 0);
    }

    #[test]
    fn test_whitespace_only_source() {
        assert!(lex_all("  \t\n  \r\n ").is_empty());
    }

    #[test]
    fn test_comments_only_source() {
        assert!(lex_all("* one * \n * two *").is_empty());
    }

    #[test]
    fn test_end_of_input_is_repeatable() {
        let mut lexer = Lexer::new("x");
        lexer.next_token();
        assert_eq!(lexer.next_token().kind(), TokenKind::EndOfInput);
        assert_eq!(lexer.next_token().kind(), TokenKind::EndOfInput);
    }

    // ==================== POSITION REPORTING ====================

    #[test]
    fn test_position_on_second_line() {
        let token = Lexer::new("  \n  number").next_token();
        assert_eq!(token.kind(), TokenKind::Keyword);
        assert_eq!(token.line(), 2);
        assert_eq!(token.col(), 2);
    }

    #[test]
    fn test_positions_across_comment_on_one_line() {
        let mut lexer = Lexer::new("abc * note * xyz");

        let first = lexer.next_token();
        assert_eq!(first.value(), "abc");
        assert_eq!(first.line(), 1);
        assert_eq!(first.col(), 0);

        let second = lexer.next_token();
        assert_eq!(second.value(), "xyz");
        assert_eq!(second.line(), 1);
        assert_eq!(second.col(), 13);
    }

    #[test]
    fn test_positions_in_multi_line_program() {
        let source = "number x;\nx := 3;\n{ write x; }";
        let tokens = lex_all(source);
        let positions: Vec<(u32, u32)> = tokens.iter().map(|t| (t.line(), t.col())).collect();
        assert_eq!(
            positions,
            vec![
                (1, 0),
                (1, 7),
                (1, 8),
                (2, 0),
                (2, 2),
                (2, 5),
                (2, 6),
                (3, 0),
                (3, 2),
                (3, 8),
                (3, 9),
                (3, 11),
            ]
        );
    }

    #[test]
    fn test_tab_counts_as_one_column() {
        let token = Lexer::new("\twrite").next_token();
        assert_eq!(token.col(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut lexer = Lexer::new("number\r\nx");
        let first = lexer.next_token();
        assert_eq!(first.kind(), TokenKind::Keyword);

        let second = lexer.next_token();
        assert_eq!(second.value(), "x");
        assert_eq!(second.line(), 2);
        assert_eq!(second.col(), 0);
    }

    // ==================== LENGTH BOUNDARIES ====================

    #[test]
    fn test_long_identifier_splits_at_collection_cap() {
        // 150 identifier characters: the first 100 are collected and
        // rejected, then the remaining 50 are rejected on their own.
        let tokens = lex_all(&"a".repeat(150));
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::Error);
        assert_eq!(tokens[0].value(), "identifier too long (max 20 characters)");
        assert_eq!(tokens[1].kind(), TokenKind::Error);
        assert_eq!(tokens[1].col(), 100);
    }

    #[test]
    fn test_long_number_splits_at_collection_cap() {
        let tokens = lex_all(&"7".repeat(150));
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::IntConstant);
        assert_eq!(tokens[0].value(), "7".repeat(100));
        assert_eq!(tokens[1].kind(), TokenKind::IntConstant);
        assert_eq!(tokens[1].value(), "7".repeat(50));
    }

    #[test]
    fn test_minus_counts_toward_number_cap() {
        // '-' plus 99 digits fills the cap; the 100th digit starts a
        // second constant.
        let source = format!("-{}", "3".repeat(100));
        let tokens = lex_all(&source);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].value().len(), 100);
        assert!(tokens[0].value().starts_with("-3"));
        assert_eq!(tokens[1].value(), "3");
    }

    // ==================== ERROR RECOVERY ====================

    #[test]
    fn test_scan_continues_after_unrecognized_char() {
        let tokens = lex_all("$ x");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::Error);
        assert_eq!(tokens[0].value(), "unrecognized character '$'");
        assert_eq!(tokens[0].col(), 0);
        assert_eq!(tokens[1].value(), "x");
        assert_eq!(tokens[1].col(), 2);
    }

    #[test]
    fn test_scan_continues_after_invalid_number() {
        // 'a' then '-' routes to the number rule, fails past the '-',
        // and leaves 'b' to scan as an identifier.
        let tokens = lex_all("a-b");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].value(), "a");
        assert_eq!(tokens[1].kind(), TokenKind::Error);
        assert_eq!(tokens[1].value(), "invalid number format");
        assert_eq!(tokens[1].col(), 2);
        assert_eq!(tokens[2].value(), "b");
    }

    #[test]
    fn test_multiple_errors_in_one_source() {
        // The rejected '.' after the float error fails on its own.
        let tokens = lex_all("@ # 5.5");
        let errors: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind() == TokenKind::Error)
            .map(|t| t.value())
            .collect();
        assert_eq!(
            errors,
            vec![
                "unrecognized character '@'",
                "unrecognized character '#'",
                "floating point literals are not allowed",
                "unrecognized character '.'",
            ]
        );
    }

    #[test]
    fn test_digit_then_letter_is_two_tokens() {
        let tokens = lex_all("5x");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::IntConstant);
        assert_eq!(tokens[0].value(), "5");
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
        assert_eq!(tokens[1].value(), "x");
    }

    // ==================== DENSE TOKEN SEQUENCES ====================

    #[test]
    fn test_statement_without_spaces() {
        let tokens = lex_all("x:=-5;");
        let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "Identifier(x)",
                "Operator(:=)",
                "IntConstant(-5)",
                "EndOfLine(;)",
            ]
        );
    }

    #[test]
    fn test_adjacent_delimiters() {
        let tokens = lex_all("{{}};;");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::OpenBlock,
                TokenKind::OpenBlock,
                TokenKind::CloseBlock,
                TokenKind::CloseBlock,
                TokenKind::EndOfLine,
                TokenKind::EndOfLine,
            ]
        );
    }

    #[test]
    fn test_number_directly_after_keyword_space() {
        let tokens = lex_all("repeat 3 times");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind(), TokenKind::Keyword);
        assert_eq!(tokens[1].kind(), TokenKind::IntConstant);
        assert_eq!(tokens[2].kind(), TokenKind::Keyword);
    }
}
