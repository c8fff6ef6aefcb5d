//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes an identifier or keyword; the first character has been
    /// consumed.
    ///
    /// Reads the longest run of letters, digits, and underscores, then
    /// checks the whole run against the reserved words.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.peek()) {
            self.cursor.advance();
        }

        let kind = keyword_from_ident(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::Scanner;

    fn lex_ident(source: &str) -> Token {
        Scanner::new(source).next().expect("a token")
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_ident("foo");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme, "foo");
        assert_eq!(token.literal, None);
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        let token = lex_ident("_foo_bar_123");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme, "_foo_bar_123");
    }

    #[test]
    fn test_keyword_class() {
        assert_eq!(lex_ident("class").kind, TokenKind::Class);
    }

    #[test]
    fn test_keyword_fun() {
        assert_eq!(lex_ident("fun").kind, TokenKind::Fun);
    }

    #[test]
    fn test_keyword_nil() {
        assert_eq!(lex_ident("nil").kind, TokenKind::Nil);
    }

    #[test]
    fn test_keyword_this() {
        assert_eq!(lex_ident("this").kind, TokenKind::This);
    }

    #[test]
    fn test_keyword_super() {
        assert_eq!(lex_ident("super").kind, TokenKind::Super);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let token = lex_ident("classify");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme, "classify");
    }

    #[test]
    fn test_keyword_with_digit_suffix_is_identifier() {
        assert_eq!(lex_ident("or2").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(lex_ident("While").kind, TokenKind::Identifier);
        assert_eq!(lex_ident("NIL").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_lone_underscore() {
        assert_eq!(lex_ident("_").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_keyword_keeps_lexeme() {
        let token = lex_ident("while");
        assert_eq!(token.kind, TokenKind::While);
        assert_eq!(token.lexeme, "while");
        assert_eq!(token.literal, None);
    }
}
