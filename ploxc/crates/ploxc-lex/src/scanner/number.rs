//! Number literal lexing.

use crate::chars::is_digit;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a number literal; the first digit has been consumed.
    ///
    /// # Number Formats
    ///
    /// - Integer: `42`, `007`
    /// - Decimal: `3.14`
    ///
    /// A `.` is only part of the number when a digit follows it, so `1.`
    /// and `1.foo` leave the dot for the next token. The literal is the raw
    /// numeral text; converting it to a value is up to the consumer.
    pub(crate) fn lex_number(&mut self) -> Token {
        while is_digit(self.cursor.peek()) {
            self.cursor.advance();
        }

        if self.cursor.peek() == '.' && is_digit(self.cursor.peek_next()) {
            self.cursor.advance();
            while is_digit(self.cursor.peek()) {
                self.cursor.advance();
            }
        }

        let text = self.lexeme();
        self.literal_token(TokenKind::Number, text)
    }
}
