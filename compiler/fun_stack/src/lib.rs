//! Stack growth for recursive descent.
//!
//! The parser re-enters the expression grammar once per nesting level and
//! the evaluator recurses once per AST level, so inputs like
//! `((((...1...))))` or `!!!!...x` recurse as deep as they are long. Wrap
//! those recursive entry points in [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate switches to a freshly allocated
//! segment when less than [`RED_ZONE`] bytes remain. On wasm the closure is
//! called directly.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the
/// red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// wasm manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
