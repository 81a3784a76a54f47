//! Store configuration from TOML (`[store]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which question store adapter to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// One JSON document on disk
    #[default]
    Json,
    /// Process memory only
    Memory,
}

/// Raw store configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    pub backend: StoreBackend,
    /// Location of the JSON store; defaults to the user data directory
    pub path: Option<PathBuf>,
    /// Populate a newly created store with the standard data set
    pub seed: bool,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Json,
            path: None,
            seed: true,
        }
    }
}

impl FileStoreConfig {
    /// Configured path, or [`default_store_path`] when unset
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_store_path)
    }
}

/// `<data dir>/trivia/questions.json`, or a file in the working directory
/// when the platform has no data directory.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("trivia").join("questions.json"))
        .unwrap_or_else(|| PathBuf::from("trivia-questions.json"))
}
