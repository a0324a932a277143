//! Core diagnostic types.
//!
//! Defines [`Diagnostic`] and [`Label`], the building blocks every phase
//! uses to report errors. Every diagnostic is an error: the pipeline has no
//! recoverable findings to report.

use std::fmt;

use fun_ir::Pos;

use crate::ErrorCode;

/// A labeled source position with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub pos: Pos,
    pub message: String,
    /// Whether this is the main error location.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(pos: Pos, message: impl Into<String>) -> Self {
        Label {
            pos,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(pos: Pos, message: impl Into<String>) -> Self {
        Label {
            pos,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A diagnostic with everything needed to render an error message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub labels: Vec<Label>,
    /// Human-readable hints for fixing the error.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, pos: Pos, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(pos, message));
        self
    }

    pub fn with_secondary_label(mut self, pos: Pos, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(pos, message));
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Position of the first primary label.
    pub fn primary_pos(&self) -> Option<Pos> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.pos)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(pos) = self.primary_pos() {
            write!(f, " at {pos}")?;
        }
        Ok(())
    }
}
