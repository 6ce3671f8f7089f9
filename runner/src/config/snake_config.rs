use std::time::Duration;

use common::config::Validate;
use common::games::snake::{SnakeSettings, MAX_FIELD_SIZE, MIN_FIELD_SIZE};
use common::games::{Cell, Direction};
use common::{
    DEFAULT_PIE_REWARD, DEFAULT_SNAKE_BASE_INTERVAL_MS, DEFAULT_SNAKE_FIELD_SIZE,
    DEFAULT_SNAKE_INTERVAL_STEP_MS, DEFAULT_SNAKE_MIN_INTERVAL_MS, DEFAULT_SNAKE_SPEED_UP_EVERY,
};
use serde::{Deserialize, Serialize};

const START_LENGTH: i32 = 3;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct SnakeConfig {
    pub field_size: u32,
    pub base_interval_ms: u64,
    pub min_interval_ms: u64,
    pub interval_step_ms: u64,
    pub speed_up_every: u32,
    pub pie_reward: u32,
}

impl SnakeConfig {
    /// Square field with a three-segment snake in the middle, heading right.
    pub fn to_settings(&self) -> SnakeSettings {
        let size = self.field_size as usize;
        let center = (size / 2) as i32;
        let start_body = (0..START_LENGTH)
            .map(|offset| Cell::new(center - offset, center))
            .collect();

        SnakeSettings {
            field_width: size,
            field_height: size,
            start_body,
            start_heading: Direction::Right,
            base_interval: Duration::from_millis(self.base_interval_ms),
            min_interval: Duration::from_millis(self.min_interval_ms),
            interval_step: Duration::from_millis(self.interval_step_ms),
            speed_up_every: self.speed_up_every,
            pie_reward: self.pie_reward,
        }
    }
}

impl Validate for SnakeConfig {
    fn validate(&self) -> Result<(), String> {
        let size = self.field_size as usize;
        if !(MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&size) {
            return Err(format!(
                "field_size must be between {} and {}, got {}",
                MIN_FIELD_SIZE, MAX_FIELD_SIZE, self.field_size
            ));
        }
        if self.min_interval_ms == 0 {
            return Err("min_interval_ms must be greater than 0".to_string());
        }
        if self.min_interval_ms > self.base_interval_ms {
            return Err(format!(
                "min_interval_ms ({}) must not exceed base_interval_ms ({})",
                self.min_interval_ms, self.base_interval_ms
            ));
        }
        if self.base_interval_ms > 1000 {
            return Err("base_interval_ms must not exceed 1000".to_string());
        }
        if self.speed_up_every == 0 {
            return Err("speed_up_every must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            field_size: DEFAULT_SNAKE_FIELD_SIZE as u32,
            base_interval_ms: DEFAULT_SNAKE_BASE_INTERVAL_MS,
            min_interval_ms: DEFAULT_SNAKE_MIN_INTERVAL_MS,
            interval_step_ms: DEFAULT_SNAKE_INTERVAL_STEP_MS,
            speed_up_every: DEFAULT_SNAKE_SPEED_UP_EVERY,
            pie_reward: DEFAULT_PIE_REWARD,
        }
    }
}
