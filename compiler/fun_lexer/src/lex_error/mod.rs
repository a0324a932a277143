//! Lexer error types.
//!
//! Every lexical failure carries WHERE (`pos`) and WHAT (`kind`). Lexing
//! stops at the first error; there is no partial token list.

mod diagnostics;

use fun_ir::Pos;
use thiserror::Error;

/// A lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at {pos}")]
pub struct LexError {
    pub pos: Pos,
    pub kind: LexErrorKind,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// A character no token starts with.
    #[error("unexpected character `{ch}`")]
    UnexpectedCharacter { ch: char },

    /// `1.2.3`
    #[error("invalid number literal: too many decimal points")]
    TooManyDecimalPoints,

    /// A numeric run without any digit, e.g. a lone `.`.
    #[error("invalid number literal `{text}`: expected digits")]
    MissingDigits { text: String },

    /// Missing closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,
}

impl LexError {
    pub fn new(pos: Pos, kind: LexErrorKind) -> Self {
        LexError { pos, kind }
    }

    pub fn unexpected_character(pos: Pos, ch: char) -> Self {
        Self::new(pos, LexErrorKind::UnexpectedCharacter { ch })
    }

    pub fn too_many_decimal_points(pos: Pos) -> Self {
        Self::new(pos, LexErrorKind::TooManyDecimalPoints)
    }

    pub fn missing_digits(pos: Pos, text: impl Into<String>) -> Self {
        Self::new(pos, LexErrorKind::MissingDigits { text: text.into() })
    }

    /// `pos` is the position of the opening quote.
    pub fn unterminated_string(pos: Pos) -> Self {
        Self::new(pos, LexErrorKind::UnterminatedString)
    }
}
