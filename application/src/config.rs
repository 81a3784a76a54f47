//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave.

/// Application behavior configuration.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Reject creating a question whose category does not exist.
    ///
    /// Off by default: the store accepts any category id on insert.
    pub enforce_category_on_create: bool,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig that checks categories on create.
    pub fn strict() -> Self {
        Self {
            enforce_category_on_create: true,
        }
    }
}
