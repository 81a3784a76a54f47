//! Question store adapters
//!
//! Implementations of the [`QuestionStore`](trivia_application::QuestionStore)
//! port.
//!
//! # Components
//!
//! - [`InMemoryQuestionStore`] - volatile, for tests and demos
//! - [`JsonFileQuestionStore`] - durable, one JSON document on disk
//! - [`seed_snapshot`] - the standard six categories and nineteen questions

mod json_file;
mod memory;
mod seed;
mod snapshot;

pub use json_file::JsonFileQuestionStore;
pub use memory::InMemoryQuestionStore;
pub use seed::seed_snapshot;
pub use snapshot::StoreSnapshot;
