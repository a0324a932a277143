//! Command-line parsing for the `fun` binary.
//!
//! Flags may appear anywhere; the first positional argument names the
//! command and the second, where required, the source file.

use fun_diagnostic::ColorMode;
use thiserror::Error;

/// What the binary should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Repl,
    Run(String),
    Lex(String),
    Parse(String),
    Help,
    Version,
}

/// Flags shared by every command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub color: ColorMode,
    /// Suppress the REPL banner.
    pub quiet: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),
    #[error("`{command}` needs a file path")]
    MissingPath { command: String },
    #[error("invalid color mode `{0}` (expected auto, always or never)")]
    InvalidColor(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Parse arguments, excluding the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<(Command, Options), CliError> {
    let mut options = Options::default();
    let mut positional = Vec::new();

    for arg in args.iter().map(|a| a.as_ref()) {
        if let Some(mode) = arg.strip_prefix("--color=") {
            options.color =
                ColorMode::from_flag(mode).ok_or_else(|| CliError::InvalidColor(mode.to_string()))?;
        } else if arg == "--quiet" || arg == "-q" {
            options.quiet = true;
        } else if arg == "--help" || arg == "-h" {
            return Ok((Command::Help, options));
        } else if arg == "--version" || arg == "-V" {
            return Ok((Command::Version, options));
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownFlag(arg.to_string()));
        } else {
            positional.push(arg);
        }
    }

    let mut rest = positional.into_iter();
    let command = match rest.next() {
        None | Some("repl") => Command::Repl,
        Some("help") => Command::Help,
        Some("version") => Command::Version,
        Some(name @ ("run" | "lex" | "parse")) => {
            let make: fn(String) -> Command = match name {
                "run" => Command::Run,
                "lex" => Command::Lex,
                _ => Command::Parse,
            };
            let path = rest.next().ok_or_else(|| CliError::MissingPath {
                command: name.to_string(),
            })?;
            make(path.to_string())
        }
        Some(other) if other.ends_with(".fun") => Command::Run(other.to_string()),
        Some(other) => return Err(CliError::UnknownCommand(other.to_string())),
    };

    if let Some(extra) = rest.next() {
        return Err(CliError::UnexpectedArgument(extra.to_string()));
    }

    Ok((command, options))
}

/// Usage text for `fun help`.
pub fn usage() -> String {
    format!(
        "\
FunLang {version}

Usage: fun [command] [options]

Commands:
  repl                 Start the interactive REPL (default)
  run <file>           Evaluate a file and print the last value
  lex <file>           Tokenize a file and display tokens
  parse <file>         Parse a file and display the AST
  help                 Show this help message
  version              Show the version

Options:
  --color=<mode>       Diagnostic colors: auto, always, never
  -q, --quiet          Do not print the REPL banner

Set RUST_LOG (e.g. RUST_LOG=fun_eval=debug) to enable logging on stderr.",
        version = env!("CARGO_PKG_VERSION")
    )
}
