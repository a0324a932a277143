//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over the fixed value set. Arithmetic
//! (`+ - * / %`) and logical/comparison (`&& || > < >= <= == !=`) have
//! separate entry points because they coerce operands differently.

use fun_ir::{BinaryOp, LogicalOp};

use crate::errors::{division_by_zero, invalid_operator};
use crate::{EvalResult, Value};

/// Evaluate an arithmetic operator.
///
/// - number op number: float arithmetic, `/` by zero fails
/// - either side a string: `+` concatenates with another string or a
///   number's display text; booleans, null and other operators fail
/// - numbers and booleans: booleans count as 1/0
/// - anything involving null: null
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(*a, *b, op),
        (Value::Str(_), _) | (_, Value::Str(_)) => eval_string_binary(left, right, op),
        (Value::Number(_) | Value::Bool(_), Value::Number(_) | Value::Bool(_)) => {
            match (left.as_number(), right.as_number()) {
                (Some(a), Some(b)) => eval_number_binary(a, b, op),
                _ => Ok(Value::Null),
            }
        }
        _ => Ok(Value::Null),
    }
}

fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            a / b
        }
        BinaryOp::Mod => a % b,
    };
    Ok(Value::Number(result))
}

fn eval_string_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right, op) {
        (
            Value::Str(_) | Value::Number(_),
            Value::Str(_) | Value::Number(_),
            BinaryOp::Add,
        ) => Ok(Value::string(format!("{left}{right}"))),
        _ => Err(invalid_operator(op.as_symbol(), left, right)),
    }
}

/// Evaluate a logical or comparison operator.
///
/// - numbers and booleans: compared as f64 (booleans count as 1/0);
///   `&&`/`||` treat non-zero, non-NaN as true
/// - either side a string: only `==`/`!=`, by text; a string never equals
///   a non-string
/// - anything else: `false`
pub fn evaluate_logical(left: &Value, right: &Value, op: LogicalOp) -> EvalResult {
    match (left, right) {
        (Value::Str(_), _) | (_, Value::Str(_)) => eval_string_logical(left, right, op),
        (Value::Number(_) | Value::Bool(_), Value::Number(_) | Value::Bool(_)) => {
            match (left.as_number(), right.as_number()) {
                (Some(a), Some(b)) => Ok(Value::Bool(eval_number_logical(a, b, op))),
                _ => Ok(Value::Bool(false)),
            }
        }
        _ => Ok(Value::Bool(false)),
    }
}

fn eval_number_logical(a: f64, b: f64, op: LogicalOp) -> bool {
    match op {
        LogicalOp::And => truth(a) && truth(b),
        LogicalOp::Or => truth(a) || truth(b),
        LogicalOp::Gt => a > b,
        LogicalOp::Lt => a < b,
        LogicalOp::GtEq => a >= b,
        LogicalOp::LtEq => a <= b,
        LogicalOp::Eq => a == b,
        LogicalOp::NotEq => a != b,
    }
}

#[inline]
fn truth(n: f64) -> bool {
    n != 0.0 && !n.is_nan()
}

fn eval_string_logical(left: &Value, right: &Value, op: LogicalOp) -> EvalResult {
    if !op.is_equality() {
        return Err(invalid_operator(op.as_symbol(), left, right));
    }
    let equal = match (left.as_str(), right.as_str()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };
    Ok(Value::Bool(match op {
        LogicalOp::NotEq => !equal,
        _ => equal,
    }))
}
