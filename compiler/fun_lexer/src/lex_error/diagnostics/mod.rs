//! Lexer error to diagnostic conversion (E0xxx).

use fun_diagnostic::{Diagnostic, ErrorCode};

use super::{LexError, LexErrorKind};

impl LexErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnterminatedString => ErrorCode::E0001,
            Self::UnexpectedCharacter { .. } => ErrorCode::E0002,
            Self::TooManyDecimalPoints | Self::MissingDigits { .. } => ErrorCode::E0003,
        }
    }

    /// Concise label for the primary position.
    pub fn primary_label(&self) -> &'static str {
        match self {
            Self::UnterminatedString => "string starts here",
            Self::UnexpectedCharacter { .. } => "unexpected character",
            Self::TooManyDecimalPoints => "second decimal point in this literal",
            Self::MissingDigits { .. } => "expected digits",
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::UnterminatedString => Some("add a closing `\"`".to_string()),
            Self::UnexpectedCharacter { ch: '&' } => Some("use `&&` for logical and".to_string()),
            Self::UnexpectedCharacter { ch: '|' } => Some("use `||` for logical or".to_string()),
            _ => None,
        }
    }
}

impl LexError {
    /// Convert this `LexError` into a `Diagnostic`.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.error_code())
            .with_message(format!("LexicalError: {}", self.kind))
            .with_label(self.pos, self.kind.primary_label());
        if let Some(suggestion) = self.kind.suggestion() {
            diag = diag.with_suggestion(suggestion);
        }
        diag
    }
}

#[cfg(test)]
mod tests;
