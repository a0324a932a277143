//! AST types.
//!
//! A closed set of node variants produced by the parser and consumed by the
//! evaluator:
//!
//! - `Program`: root, owns the statement list
//! - `Stmt`: `VariableDeclaration`, `ControlFlow`, or an expression statement
//! - `Expr`: identifiers, literals, binary/logical/unary/assignment expressions
//!
//! Nodes own their children through `Box`/`Vec`. The tree is immutable after
//! construction. `Display` renders a compact prefix form, e.g. `(+ 1 (* 2 3))`,
//! used by AST dumps and tests.

mod display;
mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use stmt::{BlockKind, ControlFlow, Program, Stmt, StmtKind, VariableDeclaration};

#[cfg(test)]
mod tests;
