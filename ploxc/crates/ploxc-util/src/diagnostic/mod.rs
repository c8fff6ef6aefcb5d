//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting, and rendering
//! diagnostics (errors, warnings, notes, and help messages) about a source
//! buffer.
//!
//! # Examples
//!
//! ```
//! use ploxc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use ploxc_util::Span;
//!
//! let source = "print @;";
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character.")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::locate(source, 6, 7, 1))
//!     .emit(&handler);
//!
//! let report = handler.diagnostics()[0].render(source);
//! assert!(report.starts_with("error[E1001]: Unexpected character."));
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::{line_text, Span};
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use ploxc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error in the source
    Error,
    /// Something suspicious that does not stop processing
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Render the diagnostic against the source it was reported on.
    ///
    /// The snippet is cut from `source` at the diagnostic's span. A span
    /// reaching past the end of its first line is underlined to the end of
    /// that line.
    ///
    /// ```text
    /// error[E1002]: Unterminated string.
    ///   --> line 1:7
    ///   1 | print "abc
    ///     |       ^^^^
    ///   = help: add a closing '"'
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = String::new();
        match self.code {
            Some(code) => out.push_str(&format!("{}[{}]: {}\n", self.level, code, self.message)),
            None => out.push_str(&format!("{}: {}\n", self.level, self.message)),
        }

        if self.span != Span::DUMMY {
            out.push_str(&format!("  --> line {}:{}\n", self.span.line, self.span.column));
        }

        if let Some(snippet) = self.snippet_from(source) {
            out.push_str(&snippet.format());
            out.push('\n');
        }

        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }

        out
    }

    fn snippet_from(&self, source: &str) -> Option<SourceSnippet> {
        let text = line_text(source, self.span.line as usize).ok()?;
        let start_column = self.span.column as usize;
        let line_chars = text.chars().count();
        let width = self
            .span
            .slice(source)
            .ok()?
            .split('\n')
            .next()
            .map_or(0, |first| first.trim_end_matches('\r').chars().count());
        let end_column = (start_column + width).min(line_chars + 1);
        Some(SourceSnippet::new(text, self.span.line as usize, start_column, end_column))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if self.span != Span::DUMMY {
            write!(f, " (line {})", self.span.line)?;
        }
        Ok(())
    }
}

/// Collector for diagnostics emitted during a run
///
/// Uses interior mutability so every stage can report through a shared
/// reference.
///
/// # Examples
///
/// ```
/// use ploxc_util::diagnostic::{Diagnostic, Handler};
/// use ploxc_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("Unexpected character.", Span::DUMMY));
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
