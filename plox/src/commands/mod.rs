//! Command modules for the plox CLI.
//!
//! `plox SCRIPT` scans a file; `plox` alone starts the interactive prompt.
//! Shared token printing and error reporting live in [`common`].

pub mod common;

pub mod prompt;
pub mod run_file;

// Re-export command types and functions
pub use prompt::{run_prompt, PromptArgs};
pub use run_file::{run_file, RunFileArgs};
