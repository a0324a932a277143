//! Parse error to diagnostic conversion (E1xxx).
//!
//! Lexical errors passed through `ParseError::Lex` keep their own E0xxx
//! conversion.

use fun_diagnostic::{Diagnostic, ErrorCode};

use super::{ParseError, ParseErrorKind};

impl ParseErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnexpectedToken { .. } => ErrorCode::E1001,
            Self::Expected { .. } => ErrorCode::E1002,
            Self::ConstWithoutValue { .. } => ErrorCode::E1003,
            Self::UnsupportedConditional { .. } => ErrorCode::E1004,
            Self::InvalidNumber { .. } => ErrorCode::E1005,
        }
    }

    pub fn primary_label(&self) -> &'static str {
        match self {
            Self::UnexpectedToken { .. } => "not the start of an expression",
            Self::Expected { expected, .. } => *expected,
            Self::ConstWithoutValue { .. } => "declared without a value",
            Self::UnsupportedConditional { .. } => "conditional keyword",
            Self::InvalidNumber { .. } => "not a well-formed number",
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ConstWithoutValue { name } => Some(format!(
                "give it a value with `const {name} = ...;` or declare it with `let`"
            )),
            _ => None,
        }
    }
}

impl ParseError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ParseError::Lex(e) => e.kind.error_code(),
            ParseError::Syntax { kind, .. } => kind.error_code(),
        }
    }

    /// Convert this `ParseError` into a `Diagnostic`.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lex(e) => e.to_diagnostic(),
            ParseError::Syntax { kind, pos } => {
                let mut diag = Diagnostic::error(kind.error_code())
                    .with_message(format!("SyntaxError: {kind}"))
                    .with_label(*pos, kind.primary_label());
                if let Some(suggestion) = kind.suggestion() {
                    diag = diag.with_suggestion(suggestion);
                }
                diag
            }
        }
    }
}
