//! Comment lexing.

use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Skips the rest of a `//` comment.
    ///
    /// Stops before the terminating newline so the dispatcher sees it and
    /// the line count stays exact.
    pub(crate) fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.peek() != '\n' {
            self.cursor.advance();
        }
    }
}
