//! FunLang IR - tokens, positions and AST.
//!
//! This crate contains the data structures shared by every phase:
//! - `Pos` for line/column source locations
//! - `Token` and `TokenKind` for lexer output
//! - AST nodes (`Program`, `Stmt`, `Expr`) for parser output
//!
//! It has no dependencies. The lexer produces tokens, the parser consumes
//! them and produces a `Program`, and the evaluator walks that `Program`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod position;
mod token;

pub use ast::{
    BinaryOp, BlockKind, ControlFlow, Expr, ExprKind, LogicalOp, Program, Stmt, StmtKind, UnaryOp,
    VariableDeclaration,
};
pub use position::Pos;
pub use token::{Token, TokenKind, EOF_TEXT};
