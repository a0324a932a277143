use crate::{ParseError, ParseErrorKind, Parser};
use fun_ir::{Pos, Program, StmtKind};
use pretty_assertions::assert_eq;

fn parse(source: &str) -> Program {
    Parser::new()
        .produce_ast(source)
        .unwrap_or_else(|e| panic!("produce_ast({source:?}) failed: {e}"))
}

fn parse_err(source: &str) -> ParseError {
    match Parser::new().produce_ast(source) {
        Ok(program) => panic!("expected {source:?} to fail, got {program}"),
        Err(e) => e,
    }
}

#[test]
fn const_declaration() {
    let program = parse("const message = \"hello world\";");
    assert_eq!(program.to_string(), "(const message \"hello world\")");
}

#[test]
fn let_without_value_is_null_declaration() {
    let program = parse("let x; x = 3;");
    assert_eq!(program.body.len(), 2);
    match &program.body[0].kind {
        StmtKind::VariableDeclaration(decl) => {
            assert_eq!(decl.identifier, "x");
            assert_eq!(decl.value, None);
        }
        other => panic!("expected declaration, got {other:?}"),
    }
    assert_eq!(program.to_string(), "(let x)\n(= x 3)");
}

#[test]
fn const_without_value_is_an_error() {
    let err = parse_err("const x;");
    assert_eq!(
        err.kind(),
        Some(&ParseErrorKind::ConstWithoutValue {
            name: "x".to_string()
        })
    );
    assert_eq!(err.pos(), Pos::new(1, 7));
}

#[test]
fn declaration_requires_semicolon() {
    let err = parse_err("let a = 1");
    assert_eq!(
        err.kind(),
        Some(&ParseErrorKind::Expected {
            expected: "`;` after variable declaration",
            found: "End of file".to_string(),
        })
    );
}

#[test]
fn declaration_requires_identifier() {
    let err = parse_err("let 5 = 1;");
    assert!(matches!(
        err.kind(),
        Some(ParseErrorKind::Expected { found, .. }) if found == "`5`"
    ));
}

#[test]
fn declaration_rejects_equality_operator() {
    let err = parse_err("let a == 1;");
    assert!(matches!(
        err.kind(),
        Some(ParseErrorKind::Expected { expected: "`=` or `;` after identifier", .. })
    ));
}

#[test]
fn expression_statement_semicolon_is_optional() {
    assert_eq!(parse("a = 1; b").to_string(), "(= a 1)\nb");
    assert_eq!(parse("1 2").body.len(), 2);
}

#[test]
fn empty_statements_are_skipped() {
    assert_eq!(parse(";;1;;").to_string(), "1");
}

#[test]
fn conditional_keywords_are_rejected() {
    for (source, keyword) in [
        ("if (a) b", "if"),
        ("else b", "else"),
        ("else if (a) b", "else if"),
    ] {
        let err = parse_err(source);
        assert_eq!(
            err.kind(),
            Some(&ParseErrorKind::UnsupportedConditional {
                keyword: keyword.to_string()
            }),
            "source {source:?}"
        );
        assert_eq!(err.pos(), Pos::new(1, 1));
    }
}

#[test]
fn declaration_positions() {
    let program = parse("\n  const k = 1;");
    assert_eq!(program.body[0].pos, Pos::new(2, 3));
}
