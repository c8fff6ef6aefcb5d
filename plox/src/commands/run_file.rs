//! Script command implementation.
//!
//! Reads a whole script, prints its token stream, and reports every
//! lexical error found in it.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::commands::common::{scan_and_print, RenderOptions};
use crate::error::{PloxError, Result};

/// Arguments for scanning a script file.
#[derive(Debug, Clone)]
pub struct RunFileArgs {
    /// Script to scan.
    pub path: PathBuf,
    /// Token output settings.
    pub render: RenderOptions,
}

/// Scans the script at `args.path`, printing tokens to `out` and
/// diagnostics to `err`, and returns the number of lexical errors.
pub fn run_file<O: Write, E: Write>(args: &RunFileArgs, out: &mut O, err: &mut E) -> Result<usize> {
    let source = read_script(&args.path)?;
    debug!(path = %args.path.display(), bytes = source.len(), "read script");

    let errors = scan_and_print(&source, args.render, out, err)?;
    if errors > 0 {
        debug!(errors, path = %args.path.display(), "lexical errors found");
    }
    Ok(errors)
}

fn read_script(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::InvalidData => PloxError::InvalidEncoding {
            path: path.to_path_buf(),
        },
        _ => PloxError::NoInput {
            path: path.to_path_buf(),
            source,
        },
    })
}
