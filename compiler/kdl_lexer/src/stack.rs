//! Stack growth for nested line-continuation lookahead.
//!
//! Resolving a `\` spawns a lookahead scanner, and a `\` inside that
//! scanner's whitespace run spawns another. A chain like `\ \ \ ... \`
//! therefore recurses once per backslash. The recursion is bounded by the
//! buffer length, but a long enough chain would still exhaust the native
//! stack, so each lookahead runs under [`ensure_sufficient_stack`].
//!
//! - **Native targets**: grows the stack on demand with `stacker`.
//! - **WASM targets**: plain call.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space allocated per growth (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
