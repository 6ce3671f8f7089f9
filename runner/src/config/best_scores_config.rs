use std::path::PathBuf;

use common::config::Validate;
use serde::{Deserialize, Serialize};

use super::main_config::beside_executable;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BestScoresConfig {
    pub save: bool,
    /// Relative paths resolve next to the executable.
    pub location: String,
}

impl BestScoresConfig {
    pub fn file_path(&self) -> PathBuf {
        let location = PathBuf::from(&self.location);
        if location.is_absolute() {
            location
        } else {
            beside_executable(&self.location)
        }
    }
}

impl Validate for BestScoresConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.trim().is_empty() {
            return Err("best scores location must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for BestScoresConfig {
    fn default() -> Self {
        Self {
            save: true,
            location: "kids_arcade_best_scores.yaml".to_string(),
        }
    }
}
