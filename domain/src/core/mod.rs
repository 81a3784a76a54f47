//! Core domain concepts shared across all subdomains.
//!
//! - [`error::TriviaError`]: the engine's error taxonomy
//! - [`error::ErrorKind`]: stable machine-readable classification

pub mod error;
