use std::fmt;

use fun_stack::ensure_sufficient_stack;

use super::{BlockKind, Expr, ExprKind, Program, Stmt, StmtKind};

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.fmt_prefix(f))
    }
}

impl Expr {
    fn fmt_prefix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Identifier(name) => f.write_str(name),
            ExprKind::NumericLiteral(value) => write!(f, "{value}"),
            ExprKind::StringLiteral(value) => write!(f, "\"{value}\""),
            ExprKind::Binary { op, left, right } => write!(f, "({op} {left} {right})"),
            ExprKind::Logical { op, left, right } => write!(f, "({op} {left} {right})"),
            ExprKind::Unary { op, operand } => write!(f, "({op} {operand})"),
            ExprKind::Assignment { target, value } => write!(f, "(= {target} {value})"),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockKind::If => "if",
            BlockKind::ElseIf => "else-if",
            BlockKind::Else => "else",
        })
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::VariableDeclaration(decl) => {
                let keyword = if decl.constant { "const" } else { "let" };
                match &decl.value {
                    Some(value) => write!(f, "({keyword} {} {value})", decl.identifier),
                    None => write!(f, "({keyword} {})", decl.identifier),
                }
            }
            StmtKind::ControlFlow(cf) => {
                write!(f, "({} {}", cf.block_kind, cf.condition)?;
                for stmt in &cf.block {
                    write!(f, " {stmt}")?;
                }
                f.write_str(")")
            }
            StmtKind::Expr(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.body.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}
