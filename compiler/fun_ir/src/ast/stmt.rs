//! Statement nodes and the program root.

use crate::ast::Expr;
use crate::Pos;

/// Root of one parsed input.
///
/// Always at the dummy position; it is not built from a single token.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub pos: Pos,
}

impl Program {
    pub fn new(body: Vec<Stmt>) -> Self {
        Program {
            body,
            pos: Pos::DUMMY,
        }
    }
}

/// Statement node.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub pos: Pos,
}

#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// `let x = ...;` / `const x = ...;`
    VariableDeclaration(VariableDeclaration),
    /// `if` / `else if` / `else` block.
    ControlFlow(ControlFlow),
    /// Expression statement.
    Expr(Expr),
}

/// A `let` or `const` declaration.
#[derive(Clone, PartialEq, Debug)]
pub struct VariableDeclaration {
    pub identifier: String,
    pub constant: bool,
    /// `None` for `let x;`, which declares `x` as null.
    pub value: Option<Expr>,
}

/// Which arm of a conditional chain a block belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BlockKind {
    If,
    ElseIf,
    Else,
}

/// One conditional block.
///
/// The block runs in the enclosing environment; no scope is pushed.
#[derive(Clone, PartialEq, Debug)]
pub struct ControlFlow {
    pub condition: Expr,
    pub block_kind: BlockKind,
    pub block: Vec<Stmt>,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, pos: Pos) -> Self {
        Stmt { kind, pos }
    }

    /// Expression statement at the expression's own position.
    pub fn expr(expr: Expr) -> Self {
        let pos = expr.pos;
        Stmt::new(StmtKind::Expr(expr), pos)
    }

    pub fn declaration(
        identifier: impl Into<String>,
        constant: bool,
        value: Option<Expr>,
        pos: Pos,
    ) -> Self {
        Stmt::new(
            StmtKind::VariableDeclaration(VariableDeclaration {
                identifier: identifier.into(),
                constant,
                value,
            }),
            pos,
        )
    }

    pub fn control_flow(condition: Expr, block_kind: BlockKind, block: Vec<Stmt>, pos: Pos) -> Self {
        Stmt::new(
            StmtKind::ControlFlow(ControlFlow {
                condition,
                block_kind,
                block,
            }),
            pos,
        )
    }

    /// Variant tag name, as used in traces and AST dumps.
    pub const fn kind_name(&self) -> &'static str {
        match &self.kind {
            StmtKind::VariableDeclaration(_) => "VariableDeclaration",
            StmtKind::ControlFlow(_) => "ControlFlow",
            StmtKind::Expr(expr) => expr.kind_name(),
        }
    }
}
