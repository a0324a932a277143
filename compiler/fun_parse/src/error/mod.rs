//! Parse error types.
//!
//! `produce_ast` fails with a [`ParseError`]: either a lexical error passed
//! through from the lexer, or a syntax error with a [`ParseErrorKind`] and
//! the position of the offending token.

mod diagnostics;

use fun_ir::{Pos, Token};
use fun_lexer::LexError;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Tokenization failed before parsing started.
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("{kind} at {pos}")]
    Syntax { kind: ParseErrorKind, pos: Pos },
}

/// What kind of syntax error occurred.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A token that cannot start an expression.
    #[error("unrecognized token {found}")]
    UnexpectedToken { found: String },

    /// A required token is missing.
    #[error("expected {expected}, found {found}")]
    Expected {
        expected: &'static str,
        found: String,
    },

    /// `const x;`
    #[error("constant `{name}` must have a value")]
    ConstWithoutValue { name: String },

    /// `if` / `else if` / `else` have no surface grammar yet.
    #[error("conditional statements (`{keyword}`) are not supported yet")]
    UnsupportedConditional { keyword: String },

    /// Number token text that is not a well-formed decimal literal, such as
    /// `1.2.3` or a lone `.` in a hand-built token stream.
    #[error("malformed number literal `{text}`")]
    InvalidNumber { text: String },
}

impl ParseError {
    pub fn syntax(kind: ParseErrorKind, pos: Pos) -> Self {
        ParseError::Syntax { kind, pos }
    }

    pub fn unexpected_token(found: &Token) -> Self {
        Self::syntax(
            ParseErrorKind::UnexpectedToken {
                found: found.to_string(),
            },
            found.pos,
        )
    }

    pub fn expected(expected: &'static str, found: &Token) -> Self {
        Self::syntax(
            ParseErrorKind::Expected {
                expected,
                found: found.to_string(),
            },
            found.pos,
        )
    }

    pub fn const_without_value(name: impl Into<String>, pos: Pos) -> Self {
        Self::syntax(ParseErrorKind::ConstWithoutValue { name: name.into() }, pos)
    }

    pub fn unsupported_conditional(keyword: &Token) -> Self {
        Self::syntax(
            ParseErrorKind::UnsupportedConditional {
                keyword: keyword.value.clone(),
            },
            keyword.pos,
        )
    }

    pub fn invalid_number(literal: &Token) -> Self {
        Self::syntax(
            ParseErrorKind::InvalidNumber {
                text: literal.value.clone(),
            },
            literal.pos,
        )
    }

    /// Where the error occurred.
    pub fn pos(&self) -> Pos {
        match self {
            ParseError::Lex(e) => e.pos,
            ParseError::Syntax { pos, .. } => *pos,
        }
    }

    /// Syntax error kind, `None` for lexical errors.
    pub fn kind(&self) -> Option<&ParseErrorKind> {
        match self {
            ParseError::Lex(_) => None,
            ParseError::Syntax { kind, .. } => Some(kind),
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, ParseError::Lex(_))
    }
}
