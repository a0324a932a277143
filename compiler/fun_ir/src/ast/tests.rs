use super::*;
use crate::Pos;
use pretty_assertions::assert_eq;

#[test]
fn test_binary_inherits_left_position() {
    let left = Expr::number(1.0, Pos::new(1, 1));
    let right = Expr::number(2.0, Pos::new(1, 5));
    let expr = Expr::binary(BinaryOp::Add, left, right);
    assert_eq!(expr.pos, Pos::new(1, 1));
    assert_eq!(expr.kind_name(), "BinaryExpr");
}

#[test]
fn test_assignment_inherits_target_position() {
    let expr = Expr::assignment(
        Expr::identifier("x", Pos::new(2, 3)),
        Expr::number(1.0, Pos::new(2, 7)),
    );
    assert_eq!(expr.pos, Pos::new(2, 3));
    assert_eq!(expr.kind_name(), "AssignmentExpr");
}

#[test]
fn test_program_root_has_dummy_position() {
    let program = Program::new(vec![]);
    assert!(program.pos.is_dummy());
    assert!(program.body.is_empty());
}

#[test]
fn test_display_prefix_form() {
    let expr = Expr::binary(
        BinaryOp::Add,
        Expr::number(1.0, Pos::DUMMY),
        Expr::binary(
            BinaryOp::Mul,
            Expr::number(2.0, Pos::DUMMY),
            Expr::unary(UnaryOp::Neg, Expr::identifier("x", Pos::DUMMY), Pos::DUMMY),
        ),
    );
    assert_eq!(expr.to_string(), "(+ 1 (* 2 (- x)))");
}

#[test]
fn test_display_statements() {
    let program = Program::new(vec![
        Stmt::declaration("a", false, Some(Expr::string("hi", Pos::DUMMY)), Pos::DUMMY),
        Stmt::declaration("b", true, Some(Expr::number(0.5, Pos::DUMMY)), Pos::DUMMY),
        Stmt::declaration("c", false, None, Pos::DUMMY),
        Stmt::control_flow(
            Expr::logical(
                LogicalOp::Gt,
                Expr::identifier("a", Pos::DUMMY),
                Expr::number(0.0, Pos::DUMMY),
            ),
            BlockKind::If,
            vec![Stmt::expr(Expr::assignment(
                Expr::identifier("c", Pos::DUMMY),
                Expr::number(1.0, Pos::DUMMY),
            ))],
            Pos::DUMMY,
        ),
    ]);
    assert_eq!(
        program.to_string(),
        "(let a \"hi\")\n(const b 0.5)\n(let c)\n(if (> a 0) (= c 1))"
    );
}

#[test]
fn test_stmt_kind_names() {
    let decl = Stmt::declaration("a", false, None, Pos::DUMMY);
    let expr = Stmt::expr(Expr::identifier("a", Pos::DUMMY));
    let cf = Stmt::control_flow(Expr::number(1.0, Pos::DUMMY), BlockKind::Else, vec![], Pos::DUMMY);
    assert_eq!(decl.kind_name(), "VariableDeclaration");
    assert_eq!(expr.kind_name(), "Identifier");
    assert_eq!(cf.kind_name(), "ControlFlow");
}

#[test]
fn test_operator_symbols_round_trip() {
    for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div, BinaryOp::Mod] {
        assert_eq!(BinaryOp::from_symbol(op.as_symbol()), Some(op));
    }
    for op in [
        LogicalOp::And,
        LogicalOp::Or,
        LogicalOp::Gt,
        LogicalOp::Lt,
        LogicalOp::GtEq,
        LogicalOp::LtEq,
        LogicalOp::Eq,
        LogicalOp::NotEq,
    ] {
        assert_eq!(LogicalOp::from_symbol(op.as_symbol()), Some(op));
    }
    assert_eq!(UnaryOp::from_symbol("-"), Some(UnaryOp::Neg));
    assert_eq!(UnaryOp::from_symbol("!"), Some(UnaryOp::Not));
    assert_eq!(BinaryOp::from_symbol("&&"), None);
}

#[test]
fn test_drop_long_left_chain() {
    let mut expr = Expr::number(1.0, Pos::DUMMY);
    for _ in 0..200_000 {
        expr = Expr::binary(BinaryOp::Add, expr, Expr::number(1.0, Pos::DUMMY));
    }
    assert_eq!(expr.kind_name(), "BinaryExpr");
    drop(expr);
}

#[test]
fn test_drop_deep_unary_and_assignment_chain() {
    let mut expr = Expr::identifier("x", Pos::DUMMY);
    for i in 0..200_000 {
        expr = if i % 2 == 0 {
            Expr::unary(UnaryOp::Neg, expr, Pos::DUMMY)
        } else {
            Expr::assignment(Expr::identifier("y", Pos::DUMMY), expr)
        };
    }
    drop(expr);
}

#[test]
fn test_display_deep_chain() {
    let mut expr = Expr::identifier("x", Pos::DUMMY);
    for _ in 0..100_000 {
        expr = Expr::unary(UnaryOp::Not, expr, Pos::DUMMY);
    }
    let text = expr.to_string();
    assert!(text.starts_with("(! (! "));
    assert!(text.ends_with("x))"));
}
