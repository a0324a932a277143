//! Keyword resolution.
//!
//! Reserved words are `let`, `const`, `if` and `else`. The two-word keyword
//! `else if` is not a table entry: the scanner only ever produces single
//! identifier runs, so it fuses `else` + whitespace + `if` itself (see
//! `Lexer::lex_word`).

use fun_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text {
        "let" => Some(TokenKind::Let),
        "const" => Some(TokenKind::Const),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        _ => None,
    }
}
