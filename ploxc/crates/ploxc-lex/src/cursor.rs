//! Character cursor for traversing source code.
//!
//! The [`Cursor`] owns the read position over an immutable source buffer and
//! tracks the line and column of that position. It never moves backward and
//! never allocates.

/// Sentinel returned by lookahead past the end of the source.
pub const EOF_CHAR: char = '\0';

/// A cursor for traversing source code character by character.
///
/// Positions are byte offsets into the UTF-8 source; every movement steps
/// over one whole character.
///
/// # Example
///
/// ```
/// use ploxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("!=");
/// assert_eq!(cursor.advance(), '!');
/// assert!(cursor.match_char('='));
/// assert!(cursor.is_at_end());
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the next unread character.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character `offset` bytes past the current position, or
    /// [`EOF_CHAR`] when out of bounds.
    #[inline]
    fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return EOF_CHAR;
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(EOF_CHAR)
    }

    /// Returns true once every character has been consumed.
    ///
    /// ```
    /// use ploxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// ```
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes and returns the next character.
    ///
    /// A consumed `'\n'` bumps the line counter. At end of input this returns
    /// [`EOF_CHAR`] and does not move.
    pub fn advance(&mut self) -> char {
        let c = self.char_at(0);
        if self.is_at_end() {
            return c;
        }

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Returns the next character without consuming it.
    ///
    /// ```
    /// use ploxc_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let cursor = Cursor::new("");
    /// assert_eq!(cursor.peek(), EOF_CHAR);
    /// ```
    #[inline]
    pub fn peek(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character after the next one without consuming anything.
    ///
    /// ```
    /// use ploxc_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let cursor = Cursor::new("1.5");
    /// assert_eq!(cursor.peek(), '1');
    /// assert_eq!(cursor.peek_next(), '.');
    /// assert_eq!(Cursor::new("1").peek_next(), EOF_CHAR);
    /// ```
    #[inline]
    pub fn peek_next(&self) -> char {
        let current = self.peek();
        if self.is_at_end() {
            return EOF_CHAR;
        }
        self.char_at(current.len_utf8())
    }

    /// Consumes the next character iff it equals `expected`.
    ///
    /// ```
    /// use ploxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('!'));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Source text from `start` to the current position.
    ///
    /// ```
    /// use ploxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("var x");
    /// cursor.advance();
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.slice_from(0), "var");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or_default()
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
