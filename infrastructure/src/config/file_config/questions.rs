//! Question rules from TOML (`[questions]` section)

use serde::{Deserialize, Serialize};
use trivia_application::BehaviorConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionsConfig {
    /// Reject new questions whose category does not exist
    pub enforce_category_on_create: bool,
}

impl FileQuestionsConfig {
    pub fn to_behavior(&self) -> BehaviorConfig {
        BehaviorConfig {
            enforce_category_on_create: self.enforce_category_on_create,
        }
    }
}
