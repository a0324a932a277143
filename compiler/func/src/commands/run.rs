//! The `run` command: evaluate a FunLang source file.

use std::io::Write;
use std::process::ExitCode;

use fun_diagnostic::{DiagnosticEmitter, TerminalEmitter};
use tracing::debug;

use super::{read_file, stderr_is_tty};
use crate::cli::Options;
use crate::Session;

/// Evaluate a file in a fresh session and print the last value.
pub fn run_file(path: &str, options: Options) -> ExitCode {
    let Some(source) = read_file(path) else {
        return ExitCode::FAILURE;
    };
    debug!(path, bytes = source.len(), "running file");

    let ok = run_source(
        &source,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
        options,
        stderr_is_tty(),
    );
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Evaluate `source`, writing its value to `out` or a diagnostic to `err`.
///
/// Returns whether evaluation succeeded.
pub fn run_source<W: Write, E: Write>(
    source: &str,
    out: &mut W,
    err: &mut E,
    options: Options,
    is_tty: bool,
) -> bool {
    let mut session = Session::new();
    match session.eval(source) {
        Ok(value) => {
            let _ = writeln!(out, "{value}");
            let _ = out.flush();
            true
        }
        Err(e) => {
            let mut emitter = TerminalEmitter::with_color_mode(&mut *err, options.color, is_tty)
                .with_source(source);
            emitter.emit(&e.to_diagnostic());
            emitter.emit_summary(1);
            emitter.flush();
            false
        }
    }
}
