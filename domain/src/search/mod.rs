//! Free-text search over questions.

pub mod matcher;
