//! Span module - Source location tracking.
//!
//! A [`Span`] is a half-open byte range `[start, end)` into a source buffer,
//! together with the 1-based line and column of its first character.
//!
//! # Examples
//!
//! ```
//! use ploxc_util::span::Span;
//!
//! let source = "var x = 1;";
//! let span = Span::new(4, 5, 1, 5);
//! assert_eq!(span.slice(source).unwrap(), "x");
//! ```

use crate::error::{SourceError, SourceResult};

/// Source location span
///
/// # Examples
///
/// ```
/// use ploxc_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.len(), 10);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span over `[start, end)` of `source`, deriving the column
    /// from the text between the start of the line and `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ploxc_util::span::Span;
    ///
    /// let span = Span::locate("a\n  bc", 4, 6, 2);
    /// assert_eq!(span.column, 3);
    /// ```
    pub fn locate(source: &str, start: usize, end: usize, line: u32) -> Self {
        let prefix = source.get(..start).unwrap_or(source);
        let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
        let column = prefix[line_start..].chars().count() as u32 + 1;
        Self::new(start, end, line, column)
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Resolve the span against `source`.
    ///
    /// # Errors
    ///
    /// Fails if the range is inverted, runs past the end of `source`, or
    /// does not fall on character boundaries.
    pub fn slice<'s>(&self, source: &'s str) -> SourceResult<&'s str> {
        if self.start > self.end {
            return Err(SourceError::InvalidSpan {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > source.len() {
            return Err(SourceError::SpanOutOfBounds {
                source_len: source.len(),
                span_start: self.start,
                span_end: self.end,
            });
        }
        source
            .get(self.start..self.end)
            .ok_or(SourceError::NotCharBoundary {
                start: self.start,
                end: self.end,
            })
    }
}

/// Returns the text of line `line` (1-based) without its terminator.
///
/// # Errors
///
/// Fails with [`SourceError::InvalidLineNumber`] when `line` is 0 or past
/// the last line.
///
/// # Examples
///
/// ```
/// use ploxc_util::span::line_text;
///
/// assert_eq!(line_text("a\nbb\r\nc", 2).unwrap(), "bb");
/// ```
pub fn line_text(source: &str, line: usize) -> SourceResult<&str> {
    let max_lines = source.split('\n').count();
    if line == 0 || line > max_lines {
        return Err(SourceError::InvalidLineNumber { line, max_lines });
    }
    let text = source.split('\n').nth(line - 1).unwrap_or_default();
    Ok(text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_span() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
    }

    #[test]
    fn test_len_and_empty() {
        assert_eq!(Span::new(3, 7, 1, 1).len(), 4);
        assert!(Span::new(5, 5, 1, 1).is_empty());
        assert!(Span::DUMMY.is_empty());
    }

    #[test]
    fn test_locate_column() {
        let source = "var a;\n  print a;";
        let span = Span::locate(source, 9, 14, 2);
        assert_eq!(span.column, 3);
        assert_eq!(span.slice(source).unwrap(), "print");
    }

    #[test]
    fn test_locate_counts_characters() {
        let source = "\"é\" @";
        let span = Span::locate(source, 5, 6, 1);
        assert_eq!(span.column, 5);
    }

    #[test]
    fn test_slice_errors() {
        let source = "abc";
        assert_eq!(
            Span::new(2, 1, 1, 1).slice(source),
            Err(SourceError::InvalidSpan { start: 2, end: 1 })
        );
        assert!(matches!(
            Span::new(0, 9, 1, 1).slice(source),
            Err(SourceError::SpanOutOfBounds { .. })
        ));
        assert!(matches!(
            Span::new(0, 1, 1, 1).slice("é"),
            Err(SourceError::NotCharBoundary { .. })
        ));
    }

    #[test]
    fn test_line_text() {
        let source = "first\nsecond\r\nthird";
        assert_eq!(line_text(source, 1).unwrap(), "first");
        assert_eq!(line_text(source, 2).unwrap(), "second");
        assert_eq!(line_text(source, 3).unwrap(), "third");
        assert!(line_text(source, 0).is_err());
        assert!(line_text(source, 4).is_err());
    }
}
