//! FunLang Eval - tree-walking evaluator.
//!
//! # Architecture
//!
//! - `Value`: null, number, string, boolean
//! - `Environment`: arena of scopes with constant enforcement
//! - `evaluate_binary` / `evaluate_logical` / `evaluate_unary`: direct
//!   enum-based operator dispatch
//! - `Evaluate`: per-node evaluation, reached through [`evaluate`]

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod unary_operators;
mod value;

pub use environment::{EnvError, Environment, Mutability, ScopeId};
pub use errors::{ErrorCategory, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{evaluate, Evaluate, RESERVED_NAMES};
pub use operators::{evaluate_binary, evaluate_logical};
pub use unary_operators::evaluate_unary;
pub use value::Value;
