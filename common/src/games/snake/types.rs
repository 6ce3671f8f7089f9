use std::time::Duration;

use crate::best_scores::BestScores;
use crate::games::{Cell, Direction};
use super::snake::SnakeBody;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
    /// The body covers every cell, so no pie can be placed. This is the winning end.
    BoardFilled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeStatus {
    Idle,
    Running,
    Paused,
    GameOver(GameOverReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedTier {
    Normal,
    Fast,
    VeryFast,
}

impl SpeedTier {
    pub fn from_interval(interval: Duration) -> Self {
        match interval.as_millis() {
            0..=80 => SpeedTier::VeryFast,
            81..=100 => SpeedTier::Fast,
            _ => SpeedTier::Normal,
        }
    }
}

/// What a single `tick` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeEvent {
    /// Not running or paused; nothing changed.
    Idle,
    Moved,
    AteFood { new_personal_best: bool },
    GameOver { reason: GameOverReason, new_personal_best: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeState {
    pub body: SnakeBody,
    pub food: Option<Cell>,
    /// `None` until the game is started.
    pub heading: Option<Direction>,
    pub pending_heading: Option<Direction>,
    pub tick_interval: Duration,
    pub speed_level: u32,
    pub score: u32,
    pub pies_eaten: u32,
    pub status: SnakeStatus,
}

impl SnakeState {
    pub fn is_running(&self) -> bool {
        matches!(self.status, SnakeStatus::Running | SnakeStatus::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.status == SnakeStatus::Paused
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, SnakeStatus::GameOver(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSnapshot {
    pub state: SnakeState,
    pub field_width: usize,
    pub field_height: usize,
    pub best: BestScores,
}
