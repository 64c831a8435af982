//! Stack growth for recursive descent and tree walking.
//!
//! The parser recurses once per precedence level and the interpreter once per
//! nested node, so a deeply nested template (long operator chains, nested
//! groupings, recursive user functions) can exhaust the native stack. Wrapping
//! the recursive entry points in [`ensure_sufficient_stack`] grows the stack
//! on demand instead.
//!
//! On `wasm32` the call is a passthrough.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
