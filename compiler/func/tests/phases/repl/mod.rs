//! REPL behavior over in-memory streams.

use fun_diagnostic::ColorMode;
use func::cli::Options;
use pretty_assertions::assert_eq;

use crate::common::{run_repl_quiet, run_repl_with};

#[test]
fn evaluates_lines_against_one_environment() {
    let out = run_repl_quiet("let a = 2;\na * 21\nexit\n");
    assert_eq!(out.stdout, "> 2\n> 42\n> Goodbye!\n");
    assert_eq!(out.stderr, "");
}

#[test]
fn end_of_input_ends_the_loop() {
    let out = run_repl_quiet("1 + 1\n");
    assert_eq!(out.stdout, "> 2\n> \nGoodbye!\n");
}

#[test]
fn blank_lines_are_ignored() {
    let out = run_repl_quiet("\n   \n:q\n");
    assert_eq!(out.stdout, "> > > Goodbye!\n");
}

#[test]
fn errors_go_to_stderr_and_loop_continues() {
    let out = run_repl_quiet("missing\n\"ok\"\n:quit\n");
    assert_eq!(out.stdout, "> > ok\n> Goodbye!\n");
    assert!(out.stderr.contains("error[E6020]: NameError: cannot resolve `missing`"));
    assert!(out.stderr.contains("  --> 1:1: not found in this scope"));
}

#[test]
fn declarations_before_a_failure_persist() {
    let out = run_repl_quiet("let x = 1; x / 0\nx\nexit\n");
    assert!(out.stderr.contains("ArithmeticError"));
    assert!(out.stdout.ends_with("> 1\n> Goodbye!\n"), "{}", out.stdout);
}

#[test]
fn ast_command_prints_tree() {
    let out = run_repl_quiet(":ast let a = 1 + 2 * 3;\na\nexit\n");
    assert!(out.stdout.starts_with("> (let a (+ 1 (* 2 3)))\n"), "{}", out.stdout);
    // `:ast` does not evaluate
    assert!(out.stderr.contains("cannot resolve `a`"));
}

#[test]
fn help_and_unknown_commands() {
    let out = run_repl_quiet(":help\n:type 1\nexit\n");
    assert!(out.stdout.contains(":ast <source>"));
    assert!(out.stderr.contains("unknown command `:type 1`"));
}

#[test]
fn banner_unless_quiet() {
    let out = run_repl_with("exit\n", Options::default());
    assert!(out.stdout.contains("Welcome to FunLang REPL"));
    assert!(out.stdout.ends_with("> Goodbye!\n"));
}

#[test]
fn color_always_colors_diagnostics() {
    let options = Options {
        color: ColorMode::Always,
        quiet: true,
    };
    let out = run_repl_with("1 / 0\nexit\n", options);
    assert!(out.stderr.contains("\x1b[1;31m"));
}

#[test]
fn globals_are_available() {
    let out = run_repl_quiet("pi > 3 && e < 3\nversion\nexit\n");
    let expected = format!("> true\n> {}\n> Goodbye!\n", env!("CARGO_PKG_VERSION"));
    assert_eq!(out.stdout, expected);
}
