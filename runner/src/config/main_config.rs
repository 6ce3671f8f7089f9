use std::path::{Path, PathBuf};

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::{BestScoresConfig, ChaseConfig, GameType, SnakeConfig};

const CONFIG_FILE_NAME: &str = "kids_arcade_config.yaml";

pub(super) fn beside_executable(file_name: impl AsRef<Path>) -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name);
    }
    file_name.as_ref().to_path_buf()
}

/// Opens `path`, or the config file next to the executable when none is given.
pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(|| beside_executable(CONFIG_FILE_NAME)))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub last_game: Option<GameType>,
    pub snake: SnakeConfig,
    pub chase: ChaseConfig,
    #[serde(default)]
    pub best_scores: BestScoresConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.chase.validate()?;
        self.best_scores.validate()?;
        Ok(())
    }
}
