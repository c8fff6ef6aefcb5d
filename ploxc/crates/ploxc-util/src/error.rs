//! Core error types for ploxc-util crate
//!
//! Errors raised when a [`Span`](crate::Span) is resolved against a source
//! buffer it does not belong to.

use thiserror::Error;

/// Error type for span and source lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },

    /// Span out of bounds for the source
    #[error("Span out of bounds: source has {source_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the source in bytes
        source_len: usize,
        /// Start byte offset
        span_start: usize,
        /// End byte offset
        span_end: usize,
    },

    /// Span does not fall on UTF-8 character boundaries
    #[error("Span {start}..{end} splits a UTF-8 character")]
    NotCharBoundary {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },

    /// Invalid line number
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: usize,
        /// Number of lines in the source
        max_lines: usize,
    },
}

/// Result type alias for source lookups
pub type SourceResult<T> = std::result::Result<T, SourceError>;
