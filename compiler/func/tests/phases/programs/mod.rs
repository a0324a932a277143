//! Whole programs evaluated through a `Session`.

use fun_diagnostic::ErrorCode;
use fun_eval::Value;
use fun_ir::Pos;
use func::commands::run_source;
use func::cli::Options;
use func::Error;
use pretty_assertions::assert_eq;

use crate::common::{eval, eval_err};

#[test]
fn multi_line_program() {
    let source = "\
let width = 4;
let height = 2.5;
const area = width * height;
area";
    assert_eq!(eval(source), Value::number(10.0));
}

#[test]
fn precedence_is_standard() {
    assert_eq!(eval("2 + 3 * 4"), Value::number(14.0));
    assert_eq!(eval("2 * 3 + 4"), Value::number(10.0));
    assert_eq!(eval("10 - 2 - 3"), Value::number(5.0));
    assert_eq!(eval("8 / 4 / 2"), Value::number(1.0));
    assert_eq!(eval("-(1 + 2) * 2"), Value::number(-6.0));
}

#[test]
fn logic_and_comparison() {
    assert_eq!(eval("1 < 2 && 3 >= 3"), Value::boolean(true));
    assert_eq!(eval("false || 0"), Value::boolean(false));
    assert_eq!(eval("!false == true"), Value::boolean(true));
    assert_eq!(eval("\"a\" == \"a\""), Value::boolean(true));
    assert_eq!(eval("\"1\" == 1"), Value::boolean(false));
}

#[test]
fn strings_concatenate_with_strings_and_numbers() {
    assert_eq!(eval("\"pi is \" + 3"), Value::string("pi is 3"));
    assert_eq!(eval("1.5 + \"x\""), Value::string("1.5x"));
    assert_eq!(eval("\"a\" + \"b\""), Value::string("ab"));
}

#[test]
fn strings_do_not_concatenate_with_booleans_or_null() {
    for source in ["\"a\" + null", "\"a\" + true", "true + \"a\"", "null + \"a\""] {
        let err = eval_err(source);
        assert_eq!(err.error_code(), ErrorCode::E6010, "{source}");
    }
}

#[test]
fn long_chains_evaluate_and_release() {
    let sum = format!("1{}", " + 1".repeat(200_000));
    assert_eq!(eval(&sum), Value::number(200_001.0));
    let negated = format!("{}1", "-".repeat(200_000));
    assert_eq!(eval(&negated), Value::number(1.0));
}

#[test]
fn let_without_value_is_null() {
    assert_eq!(eval("let a; a"), Value::Null);
    assert_eq!(eval("let a; a = 5; a + 1"), Value::number(6.0));
}

#[test]
fn errors_carry_codes_and_positions() {
    let err = eval_err("let a = 1;\na / 0");
    assert_eq!(err.error_code(), ErrorCode::E6001);
    assert_eq!(err.pos(), Some(Pos::new(2, 1)));

    let err = eval_err("let s = \"abc");
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.error_code(), ErrorCode::E0001);
    assert_eq!(err.pos(), Some(Pos::new(1, 9)));

    let err = eval_err("if 1");
    assert_eq!(err.error_code(), ErrorCode::E1004);
}

#[test]
fn run_source_prints_last_value() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let ok = run_source("let a = 20; a * 2 + 2", &mut out, &mut err, Options::default(), false);
    assert!(ok);
    assert_eq!(String::from_utf8_lossy(&out), "42\n");
    assert!(err.is_empty());
}

#[test]
fn run_source_reports_diagnostic() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let ok = run_source("let a = 1;\n\"a\" - a", &mut out, &mut err, Options::default(), false);
    assert!(!ok);
    assert!(out.is_empty());

    let text = String::from_utf8_lossy(&err).into_owned();
    assert!(text.contains("error[E6010]: TypeError: operator `-`"), "{text}");
    assert!(text.contains("--> 2:1"), "{text}");
    assert!(text.contains("2 | \"a\" - a"), "{text}");
    assert!(text.contains("aborting due to previous error"), "{text}");
}
