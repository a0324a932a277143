//! FunLang driver.
//!
//! Ties the phases together for hosts:
//!
//! ```text
//! source ──► fun_lexer::tokenize ──► fun_parse::Parser ──► fun_eval::evaluate
//!                                                              │
//!                                          Session (one Environment) ◄┘
//! ```
//!
//! A [`Session`] owns one parser and one environment and keeps them for its
//! whole lifetime, so declarations made by one input are visible to the next.
//! The `fun` binary (REPL, `run`, `lex`, `parse`) is built on top of it.

pub mod cli;
pub mod commands;
mod error;
mod session;

pub use error::Error;
pub use session::{Session, GLOBALS};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=fun_eval=debug` or
/// `RUST_LOG=trace`; logs go to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
