use std::time::Duration;

use common::config::Validate;
use common::games::grid_chase::{ChaseSettings, ChaseSimulation};
use common::games::{Cell, ConfigurationError};
use common::{
    DEFAULT_CHASE_LIVES, DEFAULT_CHASE_MAZE, DEFAULT_CHASE_PLAYER_START,
    DEFAULT_CHASE_PURSUER_START, DEFAULT_DOT_REWARD, DEFAULT_PURSUER_TICK_MS,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ChaseConfig {
    /// `#` wall, `.` dot, `_` empty path.
    pub maze: Vec<String>,
    pub player_start: Cell,
    pub pursuer_start: Cell,
    pub lives: u32,
    pub dot_reward: u32,
    pub pursuer_tick_interval_ms: u64,
}

impl ChaseConfig {
    pub fn to_settings(&self) -> ChaseSettings {
        ChaseSettings {
            player_start: self.player_start,
            pursuer_start: self.pursuer_start,
            initial_lives: self.lives,
            dot_reward: self.dot_reward,
            tick_interval: Duration::from_millis(self.pursuer_tick_interval_ms),
        }
    }

    pub fn build_simulation(&self) -> Result<ChaseSimulation, ConfigurationError> {
        ChaseSimulation::from_lines(&self.maze, self.to_settings())
    }
}

impl Validate for ChaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.lives == 0 {
            return Err("lives must be greater than 0".to_string());
        }
        if self.pursuer_tick_interval_ms < 50 {
            return Err("pursuer_tick_interval_ms must be at least 50".to_string());
        }
        if self.pursuer_tick_interval_ms > 2000 {
            return Err("pursuer_tick_interval_ms must not exceed 2000".to_string());
        }
        self.build_simulation().map_err(|e| e.to_string())?;
        Ok(())
    }
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            maze: DEFAULT_CHASE_MAZE.iter().map(|row| row.to_string()).collect(),
            player_start: DEFAULT_CHASE_PLAYER_START,
            pursuer_start: DEFAULT_CHASE_PURSUER_START,
            lives: DEFAULT_CHASE_LIVES,
            dot_reward: DEFAULT_DOT_REWARD,
            pursuer_tick_interval_ms: DEFAULT_PURSUER_TICK_MS,
        }
    }
}
