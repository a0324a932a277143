use crate::{ParseError, ParseErrorKind, Parser};
use fun_ir::{BinaryOp, Expr, ExprKind, Pos, StmtKind, UnaryOp};
use pretty_assertions::assert_eq;

fn expr(source: &str) -> Expr {
    let program = Parser::new()
        .produce_ast(source)
        .unwrap_or_else(|e| panic!("produce_ast({source:?}) failed: {e}"));
    match program.body.into_iter().next().map(|s| s.kind) {
        Some(StmtKind::Expr(e)) => e,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

fn sexpr(source: &str) -> String {
    expr(source).to_string()
}

fn parse_err(source: &str) -> ParseError {
    match Parser::new().produce_ast(source) {
        Ok(program) => panic!("expected {source:?} to fail, got {program}"),
        Err(e) => e,
    }
}

#[test]
fn multiplicative_binds_tighter_than_additive() {
    assert_eq!(sexpr("2 + 3 * 4"), "(+ 2 (* 3 4))");
    assert_eq!(sexpr("2 * 3 + 4"), "(+ (* 2 3) 4)");
    assert_eq!(sexpr("1 + 6 % 4 / 2"), "(+ 1 (/ (% 6 4) 2))");
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(sexpr("10 - 2 - 3"), "(- (- 10 2) 3)");
    assert_eq!(sexpr("8 / 4 / 2"), "(/ (/ 8 4) 2)");
    assert_eq!(sexpr("a < b < c"), "(< (< a b) c)");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(sexpr("a = b = 3"), "(= a (= b 3))");
    assert_eq!(sexpr("a = 1 + 2"), "(= a (+ 1 2))");
}

#[test]
fn assignment_target_is_not_checked_here() {
    assert_eq!(sexpr("1 + 2 = 3"), "(= (+ 1 2) 3)");
}

#[test]
fn comparison_and_equality_levels() {
    assert_eq!(sexpr("a + 1 > b * 2"), "(> (+ a 1) (* b 2))");
    assert_eq!(sexpr("a > 1 == b <= 2"), "(== (> a 1) (<= b 2))");
    assert_eq!(sexpr("a != b"), "(!= a b)");
    assert_eq!(sexpr("a >= b"), "(>= a b)");
}

#[test]
fn logical_and_binds_tighter_than_or() {
    assert_eq!(sexpr("a || b && c"), "(|| a (&& b c))");
    assert_eq!(sexpr("a == 1 && b"), "(&& (== a 1) b)");
}

#[test]
fn unary_minus_on_any_operand() {
    assert_eq!(sexpr("-5"), "(- 5)");
    assert_eq!(sexpr("-a"), "(- a)");
    assert_eq!(sexpr("-(1 + 2)"), "(- (+ 1 2))");
    assert_eq!(sexpr("2 - -3"), "(- 2 (- 3))");
    assert_eq!(sexpr("--1"), "(- (- 1))");
}

#[test]
fn unary_binds_tighter_than_binary() {
    assert_eq!(sexpr("!a == b"), "(== (! a) b)");
    assert_eq!(sexpr("-a * b"), "(* (- a) b)");
    assert_eq!(sexpr("!!x"), "(! (! x))");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(sexpr("(2 + 3) * 4"), "(* (+ 2 3) 4)");
    assert_eq!(sexpr("((a))"), "a");
}

#[test]
fn literals() {
    assert_eq!(expr("3.25").kind, ExprKind::NumericLiteral(3.25));
    assert_eq!(expr(".5").kind, ExprKind::NumericLiteral(0.5));
    assert_eq!(
        expr("\"hi there\"").kind,
        ExprKind::StringLiteral("hi there".to_string())
    );
    assert_eq!(expr("name").kind, ExprKind::Identifier("name".to_string()));
}

#[test]
fn positions() {
    let e = expr("  x + 1");
    assert_eq!(e.pos, Pos::new(1, 3));

    let e = expr("-y");
    assert_eq!(e.pos, Pos::new(1, 1));
    match &e.kind {
        ExprKind::Unary { op, operand } => {
            assert_eq!(*op, UnaryOp::Neg);
            assert_eq!(operand.pos, Pos::new(1, 2));
        }
        other => panic!("expected unary, got {other:?}"),
    }

    let e = expr("a = (b)");
    assert_eq!(e.pos, Pos::new(1, 1));
}

#[test]
fn unmatched_paren_is_an_error() {
    let err = parse_err("(1 + 2");
    assert_eq!(
        err.kind(),
        Some(&ParseErrorKind::Expected {
            expected: "`)` to close `(`",
            found: "End of file".to_string(),
        })
    );
}

#[test]
fn unrecognized_token_at_primary() {
    let err = parse_err("1 + )");
    assert_eq!(
        err.kind(),
        Some(&ParseErrorKind::UnexpectedToken {
            found: "`)`".to_string()
        })
    );
    assert_eq!(err.pos(), Pos::new(1, 5));
}

#[test]
fn dangling_operator_reports_end_of_file() {
    let err = parse_err("1 +");
    assert_eq!(
        err.kind(),
        Some(&ParseErrorKind::UnexpectedToken {
            found: "End of file".to_string()
        })
    );
}

#[test]
fn keyword_in_expression_is_rejected() {
    let err = parse_err("a = if");
    assert!(matches!(
        err.kind(),
        Some(ParseErrorKind::UnsupportedConditional { .. })
    ));
}

#[test]
fn deeply_nested_parentheses() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(expr(&source).kind, ExprKind::NumericLiteral(1.0));
}

#[test]
fn deeply_nested_unary() {
    let source = format!("{}x", "!".repeat(5_000));
    assert!(matches!(expr(&source).kind, ExprKind::Unary { .. }));
}

#[test]
fn long_prefix_chain_parses_and_drops() {
    let source = format!("{}1", "-".repeat(200_000));
    let e = expr(&source);
    assert!(matches!(e.kind, ExprKind::Unary { op: UnaryOp::Neg, .. }));
}

#[test]
fn long_additive_chain_parses_and_drops() {
    let source = format!("1{}", " + 1".repeat(200_000));
    let e = expr(&source);
    assert!(matches!(e.kind, ExprKind::Binary { op: BinaryOp::Add, .. }));
    assert_eq!(e.pos, Pos::new(1, 1));
}
