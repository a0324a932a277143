//! Tree-walking interpreter.
//!
//! Every AST node type implements [`Evaluate`]; dispatch is an exhaustive
//! `match` over the node kind. Evaluation mutates the environment for
//! declarations and assignments; conditional blocks run in the enclosing
//! scope.

use fun_ir::{BlockKind, ControlFlow, Expr, ExprKind, Program, Stmt, StmtKind, VariableDeclaration};
use fun_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::{invalid_assignment_target, reserved_name};
use crate::{evaluate_binary, evaluate_logical, evaluate_unary, Environment, EvalError, EvalResult, Value};

/// Names that are bound as constants in every session and can never be
/// assignment targets.
pub const RESERVED_NAMES: [&str; 3] = ["true", "false", "null"];

/// A node that can be evaluated against an environment.
pub trait Evaluate {
    fn evaluate(&self, env: &mut Environment) -> EvalResult;
}

/// Evaluate `node` against `env`.
pub fn evaluate<N: Evaluate + ?Sized>(node: &N, env: &mut Environment) -> EvalResult {
    node.evaluate(env)
}

impl Evaluate for Program {
    /// Value of the last statement, or null for an empty program.
    fn evaluate(&self, env: &mut Environment) -> EvalResult {
        let mut last = Value::Null;
        for stmt in &self.body {
            last = stmt.evaluate(env)?;
        }
        Ok(last)
    }
}

impl Evaluate for Stmt {
    fn evaluate(&self, env: &mut Environment) -> EvalResult {
        trace!(kind = self.kind_name(), pos = %self.pos, "evaluate");
        match &self.kind {
            StmtKind::VariableDeclaration(decl) => eval_declaration(decl, self, env),
            StmtKind::ControlFlow(cf) => eval_control_flow(cf, env),
            StmtKind::Expr(expr) => expr.evaluate(env),
        }
    }
}

fn eval_declaration(decl: &VariableDeclaration, stmt: &Stmt, env: &mut Environment) -> EvalResult {
    let value = match &decl.value {
        Some(init) => init.evaluate(env)?,
        None => Value::Null,
    };
    env.declare(&decl.identifier, value, decl.constant)
        .map_err(|e| EvalError::from(e).with_pos(stmt.pos))
}

fn eval_control_flow(cf: &ControlFlow, env: &mut Environment) -> EvalResult {
    let truthy = cf.condition.evaluate(env)?.is_truthy();
    let run = match cf.block_kind {
        BlockKind::If | BlockKind::ElseIf => truthy,
        BlockKind::Else => !truthy,
    };
    if run {
        for stmt in &cf.block {
            stmt.evaluate(env)?;
        }
    }
    Ok(Value::Null)
}

impl Evaluate for Expr {
    fn evaluate(&self, env: &mut Environment) -> EvalResult {
        ensure_sufficient_stack(|| eval_expr(self, env))
    }
}

fn eval_expr(expr: &Expr, env: &mut Environment) -> EvalResult {
    match &expr.kind {
        ExprKind::Identifier(name) => env
            .lookup(name)
            .map_err(|e| EvalError::from(e).with_pos(expr.pos)),
        ExprKind::NumericLiteral(n) => Ok(Value::Number(*n)),
        ExprKind::StringLiteral(s) => Ok(Value::string(s)),
        ExprKind::Binary { op, left, right } => {
            let left = left.evaluate(env)?;
            let right = right.evaluate(env)?;
            evaluate_binary(&left, &right, *op).map_err(|e| e.with_pos(expr.pos))
        }
        ExprKind::Logical { op, left, right } => {
            let left = left.evaluate(env)?;
            let right = right.evaluate(env)?;
            evaluate_logical(&left, &right, *op).map_err(|e| e.with_pos(expr.pos))
        }
        ExprKind::Unary { op, operand } => {
            let value = operand.evaluate(env)?;
            Ok(evaluate_unary(&value, *op))
        }
        ExprKind::Assignment { target, value } => eval_assignment(target, value, expr, env),
    }
}

fn eval_assignment(target: &Expr, value: &Expr, expr: &Expr, env: &mut Environment) -> EvalResult {
    let ExprKind::Identifier(name) = &target.kind else {
        return Err(invalid_assignment_target(target.kind_name()).with_pos(target.pos));
    };
    if RESERVED_NAMES.contains(&name.as_str()) {
        return Err(reserved_name(name).with_pos(target.pos));
    }
    let value = value.evaluate(env)?;
    trace!(name = %name, "assign");
    env.assign(name, value)
        .map_err(|e| EvalError::from(e).with_pos(expr.pos))
}
