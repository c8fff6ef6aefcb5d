//! ploxc-util - Shared foundation types for the plox toolchain.
//!
//! This crate holds the pieces every other phase leans on:
//!
//! - [`span`] - byte ranges into a source buffer, stamped with line/column
//! - [`diagnostic`] - leveled, coded messages and the [`Handler`] that
//!   collects them during a run
//! - [`error`] - error types for span and source lookups
//!
//! # Example
//!
//! ```
//! use ploxc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character.")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use span::Span;
