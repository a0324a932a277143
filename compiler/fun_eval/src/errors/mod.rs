//! Error types for evaluation.
//!
//! `EvalErrorKind` is the structured error; `ErrorCategory` groups kinds
//! into the families reported to users (`NameError`, `TypeError`, ...).
//! Factory functions are the public way to build errors.

mod diagnostics;

use std::fmt;

use fun_ir::Pos;
use thiserror::Error;

use crate::{EnvError, Value};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Error family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Duplicate, undeclared or reserved names.
    Name,
    /// Assignment to a constant.
    Const,
    /// Illegal operand combination or assignment target.
    Type,
    /// Division by zero.
    Arithmetic,
}

impl ErrorCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Name => "NameError",
            ErrorCategory::Const => "ConstError",
            ErrorCategory::Type => "TypeError",
            ErrorCategory::Arithmetic => "ArithmeticError",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Name
    DuplicateDeclaration {
        name: String,
    },
    UndefinedVariable {
        name: String,
    },
    ReservedName {
        name: String,
    },

    // Const
    ConstReassignment {
        name: String,
    },

    // Type
    InvalidAssignmentTarget {
        target: &'static str,
    },
    InvalidOperator {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    // Arithmetic
    DivisionByZero,
}

impl EvalErrorKind {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateDeclaration { .. }
            | Self::UndefinedVariable { .. }
            | Self::ReservedName { .. } => ErrorCategory::Name,
            Self::ConstReassignment { .. } => ErrorCategory::Const,
            Self::InvalidAssignmentTarget { .. } | Self::InvalidOperator { .. } => {
                ErrorCategory::Type
            }
            Self::DivisionByZero => ErrorCategory::Arithmetic,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDeclaration { name } => {
                write!(f, "cannot declare `{name}`: it is already declared in this scope")
            }
            Self::UndefinedVariable { name } => {
                write!(f, "cannot resolve `{name}`: it does not exist")
            }
            Self::ReservedName { name } => write!(f, "cannot assign to reserved name `{name}`"),
            Self::ConstReassignment { name } => {
                write!(f, "cannot reassign `{name}`: it is declared as a constant")
            }
            Self::InvalidAssignmentTarget { target } => {
                write!(f, "invalid assignment target: expected an identifier, found {target}")
            }
            Self::InvalidOperator { op, left, right } => {
                write!(f, "operator `{op}` cannot be applied to {left} and {right}")
            }
            Self::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}: {}", .kind.category(), .kind)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Position of the node that failed, when known.
    pub pos: Option<Pos>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, pos: None }
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Attach the position of the failing node.
    #[must_use]
    pub fn with_pos(mut self, pos: Pos) -> Self {
        self.pos = Some(pos);
        self
    }
}

impl From<EnvError> for EvalError {
    fn from(err: EnvError) -> Self {
        match err {
            EnvError::AlreadyDeclared { name } => duplicate_declaration(&name),
            EnvError::Undefined { name } => undefined_variable(&name),
            EnvError::Constant { name } => const_reassignment(&name),
        }
    }
}

#[cold]
pub fn duplicate_declaration(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateDeclaration {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// Assignment to `true`, `false` or `null`.
#[cold]
pub fn reserved_name(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReservedName {
        name: name.to_string(),
    })
}

#[cold]
pub fn const_reassignment(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ConstReassignment {
        name: name.to_string(),
    })
}

/// `target` is the AST kind name of the left-hand side.
#[cold]
pub fn invalid_assignment_target(target: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidAssignmentTarget { target })
}

#[cold]
pub fn invalid_operator(op: &'static str, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperator {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}
