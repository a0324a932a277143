//! Command handlers for the `fun` binary.
//!
//! Each submodule implements one command. Shared helpers for reading
//! source files and reporting errors live here.

use std::io::Write;

use fun_diagnostic::{ColorMode, DiagnosticEmitter, TerminalEmitter};

use crate::Error;

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use repl::{repl, run_repl, ReplCommand};
pub use run::{run_file, run_source};

/// Read a source file, reporting failures on stderr.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            None
        }
    }
}

/// Whether stderr is a terminal, for `ColorMode::Auto`.
pub(crate) fn stderr_is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Render `error` as a diagnostic against `source`.
pub(crate) fn report<W: Write>(
    writer: W,
    error: &Error,
    source: &str,
    color: ColorMode,
    is_tty: bool,
) {
    let mut emitter = TerminalEmitter::with_color_mode(writer, color, is_tty).with_source(source);
    emitter.emit(&error.to_diagnostic());
    emitter.flush();
}
