//! Diagnostic system for error reporting.
//!
//! Every phase error (lexer, parser, evaluator) converts into a
//! [`Diagnostic`]: an [`ErrorCode`] for searchability, a message, and a
//! labeled source position. Emitters render diagnostics for a terminal.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
