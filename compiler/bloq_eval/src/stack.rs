//! Stack growth for deep expression trees.
//!
//! A flat chain of `n` operators folds into a left-leaning tree of depth `n`,
//! and evaluation recurses once per level. Scripts generated by tooling can
//! produce chains long enough to exhaust a worker thread's stack.

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available (64KB red zone).
    const RED_ZONE: usize = 64 * 1024;

    /// Stack space to allocate per growth (2MB).
    const GROWTH: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// wasm32 manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
