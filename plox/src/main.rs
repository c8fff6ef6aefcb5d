//! Plox CLI - prints the token stream of Lox source.
//!
//! With a script argument the whole file is scanned; without one an
//! interactive prompt scans each line as it is entered. Exit codes follow
//! the BSD `sysexits` convention.

mod commands;
mod config;
mod error;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::{OutputFormat, RenderOptions};
use commands::{run_file, run_prompt, PromptArgs, RunFileArgs};
use config::Config;
use error::{PloxError, Result, EX_DATAERR, EX_USAGE};

/// Plox - scan Lox source into tokens
#[derive(Parser, Debug)]
#[command(name = "plox")]
#[command(author = "Plox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source into tokens", long_about = None)]
struct Cli {
    /// Script to scan; starts an interactive prompt when omitted
    #[arg(value_name = "SCRIPT")]
    scripts: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "PLOX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "PLOX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "PLOX_NO_COLOR")]
    no_color: bool,

    /// Token output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Do not print the trailing EOF token
    #[arg(long)]
    no_eof: bool,
}

/// Main entry point for the plox CLI.
///
/// Parses command-line arguments, then hands off to [`run`]. Errors are
/// printed to stderr and mapped to their exit codes here.
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EX_USAGE);
        }
    };

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Loads configuration, initializes logging, and runs the selected mode.
fn run(cli: Cli) -> Result<ExitCode> {
    if cli.scripts.len() > 1 {
        return Err(PloxError::Usage);
    }

    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    let render = render_options(&cli, &config);
    match cli.scripts.into_iter().next() {
        Some(path) => {
            let args = RunFileArgs { path, render };
            let errors = run_file(&args, &mut io::stdout().lock(), &mut io::stderr().lock())?;
            Ok(if errors > 0 {
                ExitCode::from(EX_DATAERR)
            } else {
                ExitCode::SUCCESS
            })
        }
        None => {
            let args = PromptArgs {
                prompt: config.prompt.prompt,
                render,
            };
            run_prompt(
                &args,
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Merges command-line flags over configuration values.
fn render_options(cli: &Cli, config: &Config) -> RenderOptions {
    RenderOptions {
        format: cli.format.unwrap_or(config.output.format),
        show_eof: config.output.show_eof && !cli.no_eof,
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output on stdout stays machine-readable.
/// Colors are only used when stderr is a terminal.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color && io::stderr().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| PloxError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_script() {
        let cli = Cli::parse_from(["plox"]);
        assert!(cli.scripts.is_empty());
        assert!(!cli.verbose);
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_cli_parse_script() {
        let cli = Cli::parse_from(["plox", "main.lox"]);
        assert_eq!(cli.scripts, vec![PathBuf::from("main.lox")]);
    }

    #[test]
    fn test_cli_parse_too_many_scripts_is_usage_error() {
        let cli = Cli::parse_from(["plox", "a.lox", "b.lox"]);
        assert_eq!(cli.scripts.len(), 2);
        let err = run(cli).unwrap_err();
        assert!(matches!(err, PloxError::Usage));
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_cli_parse_format() {
        let cli = Cli::parse_from(["plox", "--format", "json", "a.lox"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        let cli = Cli::parse_from(["plox", "-F", "text"]);
        assert_eq!(cli.format, Some(OutputFormat::Text));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["plox", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "plox",
            "--verbose",
            "--no-color",
            "--no-eof",
            "--config",
            "/path/to/plox.toml",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(cli.no_eof);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/plox.toml")));
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;

        let cli = Cli::parse_from(["plox"]);
        assert_eq!(
            render_options(&cli, &config),
            RenderOptions {
                format: OutputFormat::Json,
                show_eof: true
            }
        );

        let cli = Cli::parse_from(["plox", "--format", "text", "--no-eof"]);
        assert_eq!(
            render_options(&cli, &config),
            RenderOptions {
                format: OutputFormat::Text,
                show_eof: false
            }
        );
    }

    #[test]
    fn test_config_can_hide_eof() {
        let mut config = Config::default();
        config.output.show_eof = false;
        let cli = Cli::parse_from(["plox"]);
        assert!(!render_options(&cli, &config).show_eof);
    }
}
