//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// `level` is an `EnvFilter` directive such as `"info"` or
/// `"trivia_application=debug"`. The `-v` flag and `RUST_LOG` take
/// precedence over it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    pub level: Option<String>,
    /// Also write logs to this file
    pub file: Option<PathBuf>,
}
