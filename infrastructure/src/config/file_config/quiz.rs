//! Interactive quiz configuration from TOML (`[quiz]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Rounds per `play` session
    pub questions_per_play: usize,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            questions_per_play: 5,
        }
    }
}
