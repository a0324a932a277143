//! Expression nodes.

use crate::ast::{BinaryOp, LogicalOp, UnaryOp};
use crate::Pos;

/// Expression node.
///
/// Owns its children; the tree has no sharing and no cycles. Dropping is
/// iterative, so arbitrarily deep chains such as `1 + 1 + ... + 1` or
/// `----x` release without recursing once per level.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub pos: Pos,
}

/// Expression variants.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// Variable reference: `x`
    Identifier(String),

    /// `42`, `3.14`
    NumericLiteral(f64),

    /// `"hello"`
    StringLiteral(String),

    /// Arithmetic: `left op right` with `+ - * / %`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Boolean-valued: `left op right` with `&& || > < >= <= == !=`
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Prefix: `-x`, `!x`
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// `target = value`
    ///
    /// The target is recorded uninspected; the evaluator rejects anything
    /// other than an identifier.
    Assignment { target: Box<Expr>, value: Box<Expr> },
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, pos: Pos) -> Self {
        Expr { kind, pos }
    }

    pub fn identifier(symbol: impl Into<String>, pos: Pos) -> Self {
        Expr::new(ExprKind::Identifier(symbol.into()), pos)
    }

    pub fn number(value: f64, pos: Pos) -> Self {
        Expr::new(ExprKind::NumericLiteral(value), pos)
    }

    pub fn string(value: impl Into<String>, pos: Pos) -> Self {
        Expr::new(ExprKind::StringLiteral(value.into()), pos)
    }

    /// Arithmetic node; takes the left operand's position.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        let pos = left.pos;
        Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            pos,
        )
    }

    /// Logical node; takes the left operand's position.
    pub fn logical(op: LogicalOp, left: Expr, right: Expr) -> Self {
        let pos = left.pos;
        Expr::new(
            ExprKind::Logical {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            pos,
        )
    }

    pub fn unary(op: UnaryOp, operand: Expr, pos: Pos) -> Self {
        Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            pos,
        )
    }

    /// Assignment node; takes the target's position.
    pub fn assignment(target: Expr, value: Expr) -> Self {
        let pos = target.pos;
        Expr::new(
            ExprKind::Assignment {
                target: Box::new(target),
                value: Box::new(value),
            },
            pos,
        )
    }

    /// Variant tag name, as used in traces and AST dumps.
    pub const fn kind_name(&self) -> &'static str {
        match self.kind {
            ExprKind::Identifier(_) => "Identifier",
            ExprKind::NumericLiteral(_) => "NumericLiteral",
            ExprKind::StringLiteral(_) => "StringLiteral",
            ExprKind::Binary { .. } => "BinaryExpr",
            ExprKind::Logical { .. } => "LogicalExpr",
            ExprKind::Unary { .. } => "UnaryExpr",
            ExprKind::Assignment { .. } => "AssignmentExpr",
        }
    }

    const fn is_leaf(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::Identifier(_) | ExprKind::NumericLiteral(_) | ExprKind::StringLiteral(_)
        )
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        if self.is_leaf() {
            return;
        }
        let mut pending = Vec::new();
        detach_children(&mut self.kind, &mut pending);
        // Each popped node has its children moved out before it is freed,
        // so its own `drop` sees a leaf.
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node.kind, &mut pending);
        }
    }
}

/// Replace `kind` with a leaf and queue the boxed children it owned.
fn detach_children(kind: &mut ExprKind, pending: &mut Vec<Box<Expr>>) {
    match std::mem::replace(kind, ExprKind::NumericLiteral(0.0)) {
        ExprKind::Binary { left, right, .. }
        | ExprKind::Logical { left, right, .. }
        | ExprKind::Assignment {
            target: left,
            value: right,
        } => {
            pending.push(left);
            pending.push(right);
        }
        ExprKind::Unary { operand, .. } => pending.push(operand),
        ExprKind::Identifier(_) | ExprKind::NumericLiteral(_) | ExprKind::StringLiteral(_) => {}
    }
}
