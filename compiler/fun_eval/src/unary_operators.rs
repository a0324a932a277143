//! Unary operator implementations for the evaluator.

use fun_ir::UnaryOp;

use crate::Value;

/// Evaluate a unary operation.
///
/// `-` negates numbers and `!` inverts booleans. Every other combination
/// yields null rather than failing.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> Value {
    match (value, op) {
        (Value::Number(n), UnaryOp::Neg) => Value::Number(-n),
        (Value::Bool(b), UnaryOp::Not) => Value::Bool(!b),
        _ => Value::Null,
    }
}
