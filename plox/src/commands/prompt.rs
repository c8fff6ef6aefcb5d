//! Interactive prompt implementation.
//!
//! Each input line is scanned on its own, so line numbers restart at 1 for
//! every entry. Lexical errors are reported and the session carries on.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::commands::common::{scan_and_print, RenderOptions};
use crate::error::Result;

/// Arguments for the interactive prompt.
#[derive(Debug, Clone)]
pub struct PromptArgs {
    /// Text printed before each line is read.
    pub prompt: String,
    /// Token output settings.
    pub render: RenderOptions,
}

/// Runs the prompt until `input` reaches end of file.
///
/// Returns the number of lines scanned.
pub fn run_prompt<I, O, E>(args: &PromptArgs, input: &mut I, out: &mut O, err: &mut E) -> Result<usize>
where
    I: BufRead,
    O: Write,
    E: Write,
{
    let mut buffer = String::new();
    let mut lines = 0;

    loop {
        write!(out, "{}", args.prompt)?;
        out.flush()?;

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            writeln!(out)?;
            break;
        }
        lines += 1;

        let line = buffer.trim_end_matches(['\n', '\r']);
        let errors = scan_and_print(line, args.render, out, err)?;
        err.flush()?;
        debug!(line = lines, errors, "scanned prompt input");
    }

    Ok(lines)
}
