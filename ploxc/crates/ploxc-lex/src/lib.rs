//! ploxc-lex - Lexical Scanner for the Lox Language
//!
//! This crate turns Lox source text into a flat sequence of tokens for a
//! parser to consume. Scanning is a single left-to-right pass with at most
//! two characters of lookahead.
//!
//! # Example Usage
//!
//! ```
//! use ploxc_lex::{scan, Scanner, TokenKind};
//!
//! let tokens = scan("var answer = 42;");
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Var,
//!         TokenKind::Identifier,
//!         TokenKind::Equal,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//!
//! // Or pull tokens lazily; the iterator ends before EOF.
//! let mut scanner = Scanner::new("print \"hi\";");
//! assert_eq!(scanner.next().unwrap().kind, TokenKind::Print);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token kinds, and lexical errors
//! - [`cursor`] - Character cursor for source traversal
//! - `scanner` - The scanner, split into one `impl` block per token family
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `and`, `class`, `else`, `false`, `for`, `fun`, `if`, `nil`, `or`,
//! `print`, `return`, `super`, `this`, `true`, `var`, `while`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14` (no exponent, no leading or trailing dot)
//! - **String**: `"hello"`, may span lines, no escape sequences
//!
//! ## Operators and Punctuation
//!
//! `( ) { } , . - + ; * /` and `= == ! != < <= > >=`
//!
//! ## Comments
//!
//! `//` to end of line. Comments and whitespace produce no tokens.
//!
//! # Errors
//!
//! Malformed input never stops the scan. An unexpected character or an
//! unterminated string becomes an `ERROR` token carrying a [`LexError`],
//! and scanning resumes right after it. Use [`report`] to turn those tokens
//! into diagnostics.

#![warn(missing_docs)]

mod chars;
pub mod cursor;
mod report;
mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use report::report;
pub use scanner::Scanner;
pub use token::{keyword_from_ident, LexError, Token, TokenKind};

/// Scans `source` into tokens.
///
/// Never fails: lexical errors come back as `ERROR` tokens. The result
/// always ends with exactly one `EOF` token.
pub fn scan(source: &str) -> Vec<Token> {
    Scanner::new(source).scan_tokens()
}
