//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section defaults independently, so a file only needs the keys it
//! changes.

mod logging;
mod output;
mod questions;
mod quiz;
mod store;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use questions::FileQuestionsConfig;
pub use quiz::FileQuizConfig;
pub use store::{FileStoreConfig, StoreBackend, default_store_path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub store: FileStoreConfig,
    pub questions: FileQuestionsConfig,
    pub quiz: FileQuizConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

/// A configuration value that parses but cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("quiz.questions_per_play must be at least 1")]
    NoQuizRounds,

    #[error("store.path must not be empty")]
    EmptyStorePath,

    #[error("logging.level must not be empty")]
    EmptyLogLevel,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.quiz.questions_per_play == 0 {
            issues.push(ConfigValidationError::NoQuizRounds);
        }

        if let Some(path) = &self.store.path
            && path.as_os_str().is_empty()
        {
            issues.push(ConfigValidationError::EmptyStorePath);
        }

        if let Some(level) = &self.logging.level
            && level.trim().is_empty()
        {
            issues.push(ConfigValidationError::EmptyLogLevel);
        }

        issues
    }
}
