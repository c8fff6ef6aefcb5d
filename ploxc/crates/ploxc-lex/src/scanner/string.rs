//! String literal lexing.

use crate::token::{LexError, Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a string literal; the opening `"` has been consumed.
    ///
    /// Strings may span lines and carry no escape sequences. The literal is
    /// the text strictly between the quotes. Hitting end of input first
    /// yields an `ERROR` token covering everything from the opening quote.
    pub(crate) fn lex_string(&mut self) -> Token {
        while !self.cursor.is_at_end() && self.cursor.peek() != '"' {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            return self.error_token(LexError::UnterminatedString);
        }

        self.cursor.advance();

        let lexeme = self.lexeme();
        let value = &lexeme[1..lexeme.len() - 1];
        self.literal_token(TokenKind::String, value)
    }
}
