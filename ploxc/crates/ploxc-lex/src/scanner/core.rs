//! Core scanner implementation.
//!
//! This module contains the Scanner struct, token emission, the
//! single-token dispatch, and the driving loop.

use ploxc_util::Span;
use tracing::{debug, trace};

use crate::chars::{is_digit, is_ident_start};
use crate::cursor::Cursor;
use crate::token::{LexError, Token, TokenKind};

/// Scanner for Lox source text.
///
/// A scanner makes a single pass over its source. Drive it with
/// [`Scanner::scan_tokens`] to collect everything, or use it as an
/// [`Iterator`] to pull tokens one at a time.
///
/// # Example
///
/// ```
/// use ploxc_lex::{Scanner, TokenKind};
///
/// let kinds: Vec<TokenKind> = Scanner::new("a != b").map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::BangEqual, TokenKind::Identifier]);
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    /// Read position, line, and column over the source.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset of the current lexeme's first character.
    start: usize,

    /// Line of the current lexeme's first character.
    start_line: u32,

    /// Column of the current lexeme's first character.
    start_column: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            start: 0,
            start_line: 1,
            start_column: 1,
        }
    }

    /// Scans the whole source.
    ///
    /// Malformed lexemes come back as `ERROR` tokens and scanning carries on
    /// after them. The result always ends with a single `EOF` token stamped
    /// with the final line.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        debug!(bytes = self.cursor.source().len(), "scanning source");

        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens.push(self.eof_token());

        debug!(
            tokens = tokens.len(),
            errors = tokens.iter().filter(|t| t.is_error()).count(),
            lines = self.cursor.line(),
            "scan complete"
        );
        tokens
    }

    /// Returns the next token, skipping whitespace and comments, or `None`
    /// once the source is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        while !self.cursor.is_at_end() {
            self.begin_token();
            if let Some(token) = self.scan_token() {
                return Some(token);
            }
        }
        None
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Marks the current position as the start of a new lexeme.
    fn begin_token(&mut self) {
        self.start = self.cursor.position();
        self.start_line = self.cursor.line();
        self.start_column = self.cursor.column();
    }

    /// Consumes one lexeme and returns its token, or `None` if the lexeme
    /// was whitespace or a comment.
    ///
    /// Must only be called when the cursor is not at the end.
    pub(crate) fn scan_token(&mut self) -> Option<Token> {
        let c = self.cursor.advance();
        let token = match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            '-' => self.make_token(TokenKind::Minus),
            '+' => self.make_token(TokenKind::Plus),
            ';' => self.make_token(TokenKind::Semicolon),
            '*' => self.make_token(TokenKind::Star),
            '!' => self.lex_bang(),
            '=' => self.lex_equal(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '/' => return self.lex_slash(),
            '"' => self.lex_string(),
            // The cursor bumps the line counter when it consumes '\n'.
            ' ' | '\r' | '\t' | '\n' => return None,
            c if is_digit(c) => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            c => self.error_token(LexError::UnexpectedCharacter(c)),
        };
        Some(token)
    }

    /// Creates a well-formed token spanning the current lexeme.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        self.token_with(kind, None, None)
    }

    /// Creates a token carrying a literal payload.
    pub(crate) fn literal_token(&self, kind: TokenKind, literal: &str) -> Token {
        self.token_with(kind, Some(literal.to_string()), None)
    }

    /// Creates an `ERROR` token spanning whatever was scanned so far.
    pub(crate) fn error_token(&self, error: LexError) -> Token {
        trace!(line = self.start_line, offset = self.start, %error, "lexical error");
        self.token_with(TokenKind::Error, None, Some(error))
    }

    fn token_with(&self, kind: TokenKind, literal: Option<String>, error: Option<LexError>) -> Token {
        Token {
            kind,
            lexeme: self.cursor.slice_from(self.start).to_string(),
            literal,
            line: self.start_line,
            error,
            span: Span::new(
                self.start,
                self.cursor.position(),
                self.start_line,
                self.start_column,
            ),
        }
    }

    /// Text of the lexeme scanned so far.
    pub(crate) fn lexeme(&self) -> &'a str {
        self.cursor.slice_from(self.start)
    }

    fn eof_token(&mut self) -> Token {
        self.begin_token();
        self.make_token(TokenKind::Eof)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
