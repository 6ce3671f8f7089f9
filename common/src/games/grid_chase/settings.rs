use std::time::Duration;

use crate::games::Cell;
use crate::{
    DEFAULT_CHASE_LIVES, DEFAULT_CHASE_PLAYER_START, DEFAULT_CHASE_PURSUER_START,
    DEFAULT_DOT_REWARD, DEFAULT_PURSUER_TICK_MS,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChaseSettings {
    pub player_start: Cell,
    pub pursuer_start: Cell,
    pub initial_lives: u32,
    pub dot_reward: u32,
    /// Advisory cadence for the pursuer; the simulation itself never waits.
    pub tick_interval: Duration,
}

impl Default for ChaseSettings {
    fn default() -> Self {
        Self {
            player_start: DEFAULT_CHASE_PLAYER_START,
            pursuer_start: DEFAULT_CHASE_PURSUER_START,
            initial_lives: DEFAULT_CHASE_LIVES,
            dot_reward: DEFAULT_DOT_REWARD,
            tick_interval: Duration::from_millis(DEFAULT_PURSUER_TICK_MS),
        }
    }
}
