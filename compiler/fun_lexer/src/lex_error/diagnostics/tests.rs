use fun_diagnostic::ErrorCode;
use fun_ir::Pos;
use pretty_assertions::assert_eq;

use crate::{tokenize, LexError};

#[test]
fn unterminated_string_diagnostic() {
    let diag = LexError::unterminated_string(Pos::new(1, 9)).to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.message, "LexicalError: unterminated string literal");
    assert_eq!(diag.primary_pos(), Some(Pos::new(1, 9)));
    assert_eq!(diag.suggestions, vec!["add a closing `\"`".to_string()]);
}

#[test]
fn single_ampersand_suggests_double() {
    let Err(err) = tokenize("a & b") else {
        panic!("single `&` must not lex");
    };
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0002);
    assert_eq!(diag.primary_pos(), Some(Pos::new(1, 3)));
    assert_eq!(diag.suggestions, vec!["use `&&` for logical and".to_string()]);
}

#[test]
fn number_errors_share_a_code() {
    let dots = LexError::too_many_decimal_points(Pos::new(1, 1)).to_diagnostic();
    let bare = LexError::missing_digits(Pos::new(1, 1), ".").to_diagnostic();
    assert_eq!(dots.code, ErrorCode::E0003);
    assert_eq!(bare.code, ErrorCode::E0003);
    assert!(dots.suggestions.is_empty());
    assert!(dots.code.is_lexer_error());
}
