//! Stack growth for deeply nested evaluation.
//!
//! Evaluation recurses once per level of expression nesting. On native
//! targets the stack is extended on demand with `stacker`; on WASM the
//! closure runs directly.

/// Keep at least this much stack free before recursing (128KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
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
