//! Bridging from malformed tokens to diagnostics.

use ploxc_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};

use crate::token::{LexError, Token};

impl Token {
    /// Converts an `ERROR` token into a diagnostic, or returns `None` for a
    /// well-formed token.
    ///
    /// # Example
    ///
    /// ```
    /// use ploxc_lex::scan;
    ///
    /// let tokens = scan("\"abc");
    /// let diagnostic = tokens[0].to_diagnostic().unwrap();
    /// assert_eq!(diagnostic.message, "Unterminated string.");
    /// assert!(tokens[1].to_diagnostic().is_none());
    /// ```
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        let error = self.error?;
        let builder = DiagnosticBuilder::error(error.to_string()).span(self.span);
        let diagnostic = match error {
            LexError::UnterminatedString => builder
                .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
                .note("strings run to the next '\"' and may span lines")
                .help("add a closing '\"'"),
            LexError::UnexpectedCharacter(c) => builder
                .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
                .note(format!("{:?} (U+{:04X}) does not start any token", c, c as u32))
                .help("remove it, or put it inside a string literal"),
        };
        Some(diagnostic.build())
    }
}

/// Emits a diagnostic for every `ERROR` token into `handler` and returns how
/// many were emitted.
pub fn report(tokens: &[Token], handler: &Handler) -> usize {
    let mut count = 0;
    for diagnostic in tokens.iter().filter_map(Token::to_diagnostic) {
        handler.emit_diagnostic(diagnostic);
        count += 1;
    }
    count
}
