//! Request generation guard
//!
//! In-flight requests are never cancelled; instead each one is tagged with
//! the generation current at issue time, and completions whose generation
//! has been superseded are discarded. A scope switch bumps the generation
//! so a slow response for the old scope cannot overwrite state for the new
//! one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic generation counter for one piece of refetchable state
#[derive(Debug, Default)]
pub struct FetchGuard {
    generation: AtomicU64,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request generation, superseding all previous ones
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a completion for `generation` is still the latest
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_supersedes_previous_generation() {
        let guard = FetchGuard::new();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(guard.is_current(second));
        assert!(!guard.is_current(first));
    }

    #[test]
    fn test_generations_are_monotonic() {
        let guard = FetchGuard::new();
        let a = guard.begin();
        let b = guard.begin();
        let c = guard.begin();
        assert!(a < b && b < c);
    }
}
