//! Unified driver error.

use fun_diagnostic::{Diagnostic, ErrorCode};
use fun_eval::EvalError;
use fun_ir::Pos;
use fun_parse::ParseError;
use thiserror::Error;

/// Any failure while processing one input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Lexical or syntax error; nothing was evaluated.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Evaluation stopped at the failing node. Side effects of earlier
    /// statements remain in the environment.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Error::Parse(e) => e.error_code(),
            Error::Eval(e) => e.error_code(),
        }
    }

    pub fn pos(&self) -> Option<Pos> {
        match self {
            Error::Parse(e) => Some(e.pos()),
            Error::Eval(e) => e.pos,
        }
    }

    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Parse(e) => e.to_diagnostic(),
            Error::Eval(e) => e.to_diagnostic(),
        }
    }
}
