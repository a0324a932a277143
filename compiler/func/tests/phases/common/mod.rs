//! Shared helpers for driver tests.

use fun_eval::Value;
use func::cli::Options;
use func::commands::run_repl;
use func::{Error, Session};

/// Evaluate `source` in a fresh session, panicking on failure.
pub fn eval(source: &str) -> Value {
    match Session::new().eval(source) {
        Ok(value) => value,
        Err(e) => panic!("{source:?} failed: {e}"),
    }
}

/// Evaluate `source` in a fresh session, panicking on success.
pub fn eval_err(source: &str) -> Error {
    match Session::new().eval(source) {
        Ok(value) => panic!("{source:?} should fail, got {value}"),
        Err(e) => e,
    }
}

/// Output of one REPL run.
pub struct ReplOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Feed `input` to a quiet, colorless REPL.
pub fn run_repl_quiet(input: &str) -> ReplOutput {
    let options = Options {
        quiet: true,
        ..Options::default()
    };
    run_repl_with(input, options)
}

pub fn run_repl_with(input: &str, options: Options) -> ReplOutput {
    let mut session = Session::new();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    if let Err(e) = run_repl(
        &mut session,
        input.as_bytes(),
        &mut stdout,
        &mut stderr,
        options,
        false,
    ) {
        panic!("repl io failed: {e}");
    }
    ReplOutput {
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    }
}
