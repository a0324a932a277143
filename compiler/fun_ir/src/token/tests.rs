use super::*;

#[test]
fn test_eof_token_text() {
    let tok = Token::eof(Pos::new(1, 5));
    assert_eq!(tok.kind, TokenKind::EndOfFile);
    assert_eq!(tok.value, "End of file");
    assert_eq!(tok.line(), 1);
    assert_eq!(tok.column(), 5);
}

#[test]
fn test_is_checks_kind_and_text() {
    let tok = Token::new("*", TokenKind::BinaryOperator, Pos::new(1, 1));
    assert!(tok.is(TokenKind::BinaryOperator, "*"));
    assert!(!tok.is(TokenKind::BinaryOperator, "/"));
    assert!(!tok.is(TokenKind::UnaryOperator, "*"));
}

#[test]
fn test_display() {
    let s = Token::new("hi", TokenKind::String, Pos::new(1, 1));
    let op = Token::new("+", TokenKind::BinaryOperator, Pos::new(1, 1));
    assert_eq!(s.to_string(), "\"hi\"");
    assert_eq!(op.to_string(), "`+`");
    assert_eq!(Token::eof(Pos::DUMMY).to_string(), "End of file");
}

#[test]
fn test_keywords() {
    assert!(TokenKind::Let.is_keyword());
    assert!(TokenKind::ElseIf.is_keyword());
    assert!(!TokenKind::Identifier.is_keyword());
    assert!(!TokenKind::EndOfFile.is_keyword());
}
