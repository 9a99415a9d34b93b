//! Stack growth for nested block execution.
//!
//! Every `if`, loop body and bare block runs in a nested interpreter
//! frame, so deeply nested scripts recurse deeply. On native targets the
//! stack is grown on demand with `stacker`; WASM manages its own stack.

/// Grow the stack when less than this remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_frames_do_not_overflow() {
        fn depth(n: u32) -> u32 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }

        assert_eq!(depth(100_000), 100_000);
    }

    #[test]
    fn passes_results_through() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("stop"));
        assert_eq!(result, Err("stop"));
    }
}
