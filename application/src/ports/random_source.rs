//! Random source port
//!
//! Quiz selection draws through this trait so tests can make the draw
//! deterministic.

/// Source of uniform random indices
///
/// Implementations must be safe to call from concurrent requests; each call
/// is an independent draw.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`. Never called with `len == 0`.
    fn pick_index(&self, len: usize) -> usize;
}
