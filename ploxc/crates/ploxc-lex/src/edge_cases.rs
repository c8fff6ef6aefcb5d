//! Edge case tests for ploxc-lex

#[cfg(test)]
mod tests {
    use crate::{scan, LexError, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut tokens = scan(source);
        tokens.pop();
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].lexeme, "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("var {} = 1;", name));
        assert_eq!(t[1].lexeme, name);
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        assert_eq!(kinds("fun var if"), vec![TokenKind::Fun, TokenKind::Var, TokenKind::If]);
    }

    #[test]
    fn test_edge_adjacent_tokens_without_spaces() {
        assert_eq!(
            kinds("x=1;y=x!=2"),
            vec![
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Identifier,
                TokenKind::BangEqual,
                TokenKind::Number,
            ]
        );
    }

    #[test]
    fn test_edge_operator_at_end_of_input() {
        assert_eq!(kinds("<"), vec![TokenKind::Less]);
        assert_eq!(kinds("a >"), vec![TokenKind::Identifier, TokenKind::Greater]);
    }

    #[test]
    fn test_edge_slash_at_end_of_input() {
        assert_eq!(kinds("1/"), vec![TokenKind::Number, TokenKind::Slash]);
    }

    #[test]
    fn test_edge_comment_at_end_without_newline() {
        let tokens = scan("x // trailing");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::Eof);
        assert_eq!(tokens[1].line, 1);
    }

    #[test]
    fn test_edge_comment_only_lines() {
        let tokens = scan("//a\n//b\n//c\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].line, 4);
    }

    #[test]
    fn test_edge_string_containing_comment_marker() {
        let t = lex_all("\"// not a comment\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].literal.as_deref(), Some("// not a comment"));
    }

    #[test]
    fn test_edge_lone_quote() {
        let t = lex_all("\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Error);
        assert_eq!(t[0].lexeme, "\"");
        assert_eq!(t[0].error, Some(LexError::UnterminatedString));
    }

    #[test]
    fn test_edge_two_strings_back_to_back() {
        let t = lex_all("\"a\"\"b\"");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].literal.as_deref(), Some("a"));
        assert_eq!(t[1].literal.as_deref(), Some("b"));
    }

    #[test]
    fn test_edge_error_token_keeps_line() {
        let t = lex_all("\n\n  #");
        assert_eq!(t[0].kind, TokenKind::Error);
        assert_eq!(t[0].line, 3);
        assert_eq!(t[0].span.column, 3);
    }

    #[test]
    fn test_edge_every_unexpected_character_reported() {
        let t = lex_all("@#$%^&|~`?:[]\\");
        assert_eq!(t.len(), 14);
        assert!(t.iter().all(|t| t.kind == TokenKind::Error));
        assert_eq!(t[0].error, Some(LexError::UnexpectedCharacter('@')));
        assert_eq!(t[13].error, Some(LexError::UnexpectedCharacter('\\')));
    }

    #[test]
    fn test_edge_non_ascii_letters_are_unexpected() {
        let t = lex_all("naïve");
        assert_eq!(
            t.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Identifier, TokenKind::Error, TokenKind::Identifier]
        );
        assert_eq!(t[0].lexeme, "na");
        assert_eq!(t[1].lexeme, "ï");
        assert_eq!(t[2].lexeme, "ve");
    }

    #[test]
    fn test_edge_nul_byte_is_unexpected() {
        let t = lex_all("a\0b");
        assert_eq!(t[1].kind, TokenKind::Error);
        assert_eq!(t[1].error, Some(LexError::UnexpectedCharacter('\0')));
        assert_eq!(t[2].lexeme, "b");
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = scan("a\r\nb\r\n");
        assert_eq!(t[0].line, 1);
        assert_eq!(t[1].line, 2);
        assert_eq!(t[2].kind, TokenKind::Eof);
        assert_eq!(t[2].line, 3);
    }

    #[test]
    fn test_edge_tabs_are_whitespace() {
        assert_eq!(kinds("\tprint\t1;"), vec![
            TokenKind::Print,
            TokenKind::Number,
            TokenKind::Semicolon,
        ]);
    }

    #[test]
    fn test_edge_form_feed_is_unexpected() {
        let t = lex_all("\x0c");
        assert_eq!(t[0].kind, TokenKind::Error);
    }

    #[test]
    fn test_edge_number_followed_by_dot_dot() {
        assert_eq!(
            kinds("1..2"),
            vec![TokenKind::Number, TokenKind::Dot, TokenKind::Dot, TokenKind::Number]
        );
    }

    #[test]
    fn test_edge_keyword_adjacent_to_punctuation() {
        assert_eq!(
            kinds("if(true){return;}"),
            vec![
                TokenKind::If,
                TokenKind::LeftParen,
                TokenKind::True,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::Return,
                TokenKind::Semicolon,
                TokenKind::RightBrace,
            ]
        );
    }

    #[test]
    fn test_edge_spans_are_byte_offsets() {
        let t = lex_all("\"é\" x");
        assert_eq!(t[0].span.start, 0);
        assert_eq!(t[0].span.end, 4);
        assert_eq!(t[1].span.start, 5);
        assert_eq!(t[1].span.column, 5);
    }
}
