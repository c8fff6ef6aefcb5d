//! Operator lexing.
//!
//! Each operator here has a one-character form and a two-character form
//! ending in `=`; the longer form wins whenever its second character follows.
//! The first character has already been consumed when these run.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.either('=', TokenKind::BangEqual, TokenKind::Bang)
    }

    /// Handles: `=`, `==`
    pub(crate) fn lex_equal(&mut self) -> Token {
        self.either('=', TokenKind::EqualEqual, TokenKind::Equal)
    }

    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token {
        self.either('=', TokenKind::LessEqual, TokenKind::Less)
    }

    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.either('=', TokenKind::GreaterEqual, TokenKind::Greater)
    }

    /// Handles: `/`, and `//` comments, which produce no token.
    pub(crate) fn lex_slash(&mut self) -> Option<Token> {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            None
        } else {
            Some(self.make_token(TokenKind::Slash))
        }
    }

    fn either(&mut self, second: char, matched: TokenKind, single: TokenKind) -> Token {
        let kind = if self.cursor.match_char(second) {
            matched
        } else {
            single
        };
        self.make_token(kind)
    }
}
