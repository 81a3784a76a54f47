//! Infrastructure layer for trivia
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod random;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileQuestionsConfig, FileQuizConfig, FileStoreConfig, StoreBackend, default_store_path,
};
pub use random::{FixedRandomSource, ThreadRandomSource};
pub use store::{InMemoryQuestionStore, JsonFileQuestionStore, StoreSnapshot, seed_snapshot};
