//! Runtime/eval error to diagnostic conversion.
//!
//! # Error Code Ranges (E6xxx)
//!
//! - E6001–E6009: Arithmetic
//! - E6010–E6019: Type/operator errors
//! - E6020–E6029: Name and binding errors

use fun_diagnostic::{Diagnostic, ErrorCode};

use super::{EvalError, EvalErrorKind};

impl EvalErrorKind {
    /// Map this error kind to its corresponding `ErrorCode`.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::DivisionByZero => ErrorCode::E6001,
            Self::InvalidOperator { .. } => ErrorCode::E6010,
            Self::InvalidAssignmentTarget { .. } => ErrorCode::E6011,
            Self::UndefinedVariable { .. } => ErrorCode::E6020,
            Self::DuplicateDeclaration { .. } => ErrorCode::E6021,
            Self::ReservedName { .. } => ErrorCode::E6022,
            Self::ConstReassignment { .. } => ErrorCode::E6027,
        }
    }

    /// Produce a concise label for the primary position.
    pub fn primary_label(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "division by zero here",
            Self::InvalidOperator { .. } => "operator not supported",
            Self::InvalidAssignmentTarget { .. } => "cannot be assigned to",
            Self::UndefinedVariable { .. } => "not found in this scope",
            Self::DuplicateDeclaration { .. } => "already declared",
            Self::ReservedName { .. } => "reserved name",
            Self::ConstReassignment { .. } => "cannot assign to constant",
        }
    }

    /// Produce an actionable suggestion for fixable errors.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::DivisionByZero => Some("add a zero check before dividing".to_string()),
            Self::UndefinedVariable { name } => {
                Some(format!("declare it first with `let {name} = ...;`"))
            }
            Self::DuplicateDeclaration { name } => {
                Some(format!("assign to the existing binding with `{name} = ...;`"))
            }
            Self::ConstReassignment { name } => {
                Some(format!("declare `{name}` with `let` to make it reassignable"))
            }
            Self::InvalidOperator { op, .. } if *op == "+" => {
                Some("`+` joins a string only with another string or a number".to_string())
            }
            Self::InvalidOperator { .. } => {
                Some("strings only support `+`, `==` and `!=`".to_string())
            }
            _ => None,
        }
    }
}

impl EvalError {
    pub fn error_code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    /// Convert this `EvalError` into a `Diagnostic`.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.error_code()).with_message(self.to_string());

        if let Some(pos) = self.pos {
            diag = diag.with_label(pos, self.kind.primary_label());
        }

        if let Some(suggestion) = self.kind.suggestion() {
            diag = diag.with_suggestion(suggestion);
        }

        diag
    }
}
