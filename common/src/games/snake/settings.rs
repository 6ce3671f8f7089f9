use std::collections::HashSet;
use std::time::Duration;

use crate::games::{Cell, ConfigurationError, Direction};
use crate::{
    DEFAULT_PIE_REWARD, DEFAULT_SNAKE_BASE_INTERVAL_MS, DEFAULT_SNAKE_FIELD_SIZE,
    DEFAULT_SNAKE_INTERVAL_STEP_MS, DEFAULT_SNAKE_MIN_INTERVAL_MS, DEFAULT_SNAKE_SPEED_UP_EVERY,
    DEFAULT_SNAKE_START_BODY,
};

pub const MIN_FIELD_SIZE: usize = 4;
pub const MAX_FIELD_SIZE: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSettings {
    pub field_width: usize,
    pub field_height: usize,
    /// Head first.
    pub start_body: Vec<Cell>,
    pub start_heading: Direction,
    pub base_interval: Duration,
    pub min_interval: Duration,
    pub interval_step: Duration,
    /// Every n-th pie shortens the interval by `interval_step`.
    pub speed_up_every: u32,
    pub pie_reward: u32,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_SNAKE_FIELD_SIZE,
            field_height: DEFAULT_SNAKE_FIELD_SIZE,
            start_body: DEFAULT_SNAKE_START_BODY.to_vec(),
            start_heading: Direction::Right,
            base_interval: Duration::from_millis(DEFAULT_SNAKE_BASE_INTERVAL_MS),
            min_interval: Duration::from_millis(DEFAULT_SNAKE_MIN_INTERVAL_MS),
            interval_step: Duration::from_millis(DEFAULT_SNAKE_INTERVAL_STEP_MS),
            speed_up_every: DEFAULT_SNAKE_SPEED_UP_EVERY,
            pie_reward: DEFAULT_PIE_REWARD,
        }
    }
}

impl SnakeSettings {
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.field_width
            && (cell.y as usize) < self.field_height
    }

    pub fn cell_count(&self) -> usize {
        self.field_width * self.field_height
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let size_range = MIN_FIELD_SIZE..=MAX_FIELD_SIZE;
        if !size_range.contains(&self.field_width) || !size_range.contains(&self.field_height) {
            return Err(ConfigurationError::InvalidSettings(format!(
                "field must be between {0}x{0} and {1}x{1}, got {2}x{3}",
                MIN_FIELD_SIZE, MAX_FIELD_SIZE, self.field_width, self.field_height
            )));
        }

        let Some(&head) = self.start_body.first() else {
            return Err(ConfigurationError::InvalidSettings(
                "start body must not be empty".to_string(),
            ));
        };

        if self.start_body.len() >= self.cell_count() {
            return Err(ConfigurationError::InvalidSettings(
                "start body leaves no room for food".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for &cell in &self.start_body {
            if !self.contains(cell) {
                return Err(ConfigurationError::InvalidStart {
                    cell,
                    reason: "snake segment is outside the field".to_string(),
                });
            }
            if !seen.insert(cell) {
                return Err(ConfigurationError::InvalidStart {
                    cell,
                    reason: "snake segments overlap".to_string(),
                });
            }
        }

        if let Some(pair) = self
            .start_body
            .windows(2)
            .find(|pair| pair[0].manhattan_distance(pair[1]) != 1)
        {
            return Err(ConfigurationError::InvalidStart {
                cell: pair[1],
                reason: format!("segment is not adjacent to {}", pair[0]),
            });
        }

        if self.start_body.get(1) == Some(&head.step(self.start_heading)) {
            return Err(ConfigurationError::InvalidStart {
                cell: head,
                reason: "start heading points back into the body".to_string(),
            });
        }

        if self.min_interval.is_zero() || self.min_interval > self.base_interval {
            return Err(ConfigurationError::InvalidSettings(
                "min interval must be positive and not above the base interval".to_string(),
            ));
        }

        if self.speed_up_every == 0 {
            return Err(ConfigurationError::InvalidSettings(
                "speed_up_every must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
