//! Random Source Adapters

use rand::Rng;
use trivia_application::RandomSource;

/// Production random source backed by the thread-local RNG.
///
/// Each call draws from `rand::thread_rng()`, so concurrent requests share
/// no mutable state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl ThreadRandomSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandomSource {
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Fixed random source for deterministic testing.
///
/// Always returns the same value (wrapped into range), enabling
/// reproducible tests.
///
/// # Example
///
/// ```rust
/// use trivia_application::RandomSource;
/// use trivia_infrastructure::FixedRandomSource;
///
/// let rng = FixedRandomSource::new(3);
/// assert_eq!(rng.pick_index(10), 3);
/// assert_eq!(rng.pick_index(2), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedRandomSource {
    value: usize,
}

impl FixedRandomSource {
    /// Create a fixed random source that always returns the given value.
    pub fn new(value: usize) -> Self {
        Self { value }
    }

    /// Create a random source that always picks the first candidate.
    pub fn first() -> Self {
        Self::new(0)
    }
}

impl RandomSource for FixedRandomSource {
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 { 0 } else { self.value % len }
    }
}
