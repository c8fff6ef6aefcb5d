//! Common types and utilities for plox commands.
//!
//! Both commands scan some source, print its tokens, and report lexical
//! errors. The printing and reporting live here so the two stay identical.

use std::io::Write;

use clap::ValueEnum;
use ploxc_lex::{report, Token, TokenKind};
use ploxc_util::Handler;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Output Format
// ============================================================================

/// Supported token output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// A JSON array of token records
    Json,
}

/// Settings shared by every command that prints tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// How tokens are printed.
    pub format: OutputFormat,
    /// Whether the trailing EOF token is printed.
    pub show_eof: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_eof: true,
        }
    }
}

// ============================================================================
// Token Output
// ============================================================================

/// JSON shape of one token.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
    literal: Option<&'a str>,
    line: u32,
    error: Option<String>,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.as_str(),
            lexeme: &token.lexeme,
            literal: token.literal.as_deref(),
            line: token.line,
            error: token.message(),
        }
    }
}

/// Formats one token as a text line: `<line> <KIND> '<lexeme>'`, then
/// ` literal=<literal>` and ` error=<message>` when present.
///
/// Control characters inside a lexeme are written as escapes (`\n`,
/// `\u{0}`) so every token stays on one printable output line.
pub fn format_token(token: &Token) -> String {
    let mut line = format!(
        "{} {} '{}'",
        token.line,
        token.kind,
        escape_control(&token.lexeme)
    );
    if let Some(ref literal) = token.literal {
        line.push_str(&format!(" literal={}", escape_control(literal)));
    }
    if let Some(message) = token.message() {
        line.push_str(&format!(" error={}", message));
    }
    line
}

fn escape_control(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    escaped
}

/// Writes `tokens` to `out` in the requested format.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], options: RenderOptions) -> Result<()> {
    let shown = tokens
        .iter()
        .filter(|t| options.show_eof || t.kind != TokenKind::Eof);

    match options.format {
        OutputFormat::Text => {
            for token in shown {
                writeln!(out, "{}", format_token(token))?;
            }
        }
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = shown.map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

// ============================================================================
// Error Reporting
// ============================================================================

/// Renders a diagnostic for every `ERROR` token to `err` and returns how
/// many there were.
pub fn write_diagnostics<W: Write>(err: &mut W, source: &str, tokens: &[Token]) -> Result<usize> {
    let handler = Handler::new();
    let count = report(tokens, &handler);
    for diagnostic in handler.take() {
        write!(err, "{}", diagnostic.render(source))?;
    }
    Ok(count)
}

/// Scans `source`, prints its tokens to `out` and its diagnostics to `err`,
/// and returns the number of lexical errors.
pub fn scan_and_print<O: Write, E: Write>(
    source: &str,
    options: RenderOptions,
    out: &mut O,
    err: &mut E,
) -> Result<usize> {
    let tokens = ploxc_lex::scan(source);
    write_tokens(out, &tokens, options)?;
    out.flush()?;
    write_diagnostics(err, source, &tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str, options: RenderOptions) -> String {
        let mut out = Vec::new();
        write_tokens(&mut out, &ploxc_lex::scan(source), options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        let text = render("var s = \"hi\";", RenderOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "1 VAR 'var'",
                "1 IDENTIFIER 's'",
                "1 EQUAL '='",
                "1 STRING '\"hi\"' literal=hi",
                "1 SEMICOLON ';'",
                "1 EOF ''",
            ]
        );
    }

    #[test]
    fn test_text_output_for_errors() {
        let text = render("@", RenderOptions::default());
        assert_eq!(text.lines().next(), Some("1 ERROR '@' error=Unexpected character."));
    }

    #[test]
    fn test_text_output_escapes_line_breaks() {
        let text = render("\"a\nb\"", RenderOptions::default());
        assert_eq!(text.lines().next(), Some("1 STRING '\"a\\nb\"' literal=a\\nb"));
    }

    #[test]
    fn test_text_output_escapes_control_characters() {
        let text = render("a\0b \"x\ty\"", RenderOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "1 ERROR '\\u{0}' error=Unexpected character.");
        assert_eq!(lines[3], "1 STRING '\"x\\ty\"' literal=x\\ty");
        assert!(!text.contains('\0'));
    }

    #[test]
    fn test_hide_eof() {
        let options = RenderOptions {
            show_eof: false,
            ..RenderOptions::default()
        };
        assert_eq!(render("1", options), "1 NUMBER '1' literal=1\n");
    }

    #[test]
    fn test_json_output() {
        let options = RenderOptions {
            format: OutputFormat::Json,
            show_eof: true,
        };
        let json = render("1 \"x", options);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["kind"], "NUMBER");
        assert_eq!(records[0]["literal"], "1");
        assert!(records[0]["error"].is_null());
        assert_eq!(records[1]["kind"], "ERROR");
        assert_eq!(records[1]["lexeme"], "\"x");
        assert!(records[1]["literal"].is_null());
        assert_eq!(records[1]["error"], "Unterminated string.");
        assert_eq!(records[2]["kind"], "EOF");
        assert_eq!(records[2]["line"], 1);
    }

    #[test]
    fn test_write_diagnostics() {
        let source = "ok\n  $";
        let mut err = Vec::new();
        let count = write_diagnostics(&mut err, source, &ploxc_lex::scan(source)).unwrap();
        assert_eq!(count, 1);

        let text = String::from_utf8(err).unwrap();
        assert!(text.starts_with("error[E1001]: Unexpected character.\n"));
        assert!(text.contains("  --> line 2:3\n"));
    }

    #[test]
    fn test_scan_and_print_clean_source() {
        let mut out = Vec::<u8>::new();
        let mut err = Vec::<u8>::new();
        let errors = scan_and_print("print 1;", RenderOptions::default(), &mut out, &mut err).unwrap();
        assert_eq!(errors, 0);
        assert!(err.is_empty());
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 4);
    }
}
