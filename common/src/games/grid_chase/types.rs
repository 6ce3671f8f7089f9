use crate::games::{Cell, Direction};
use super::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChaseStatus {
    Ready,
    Running,
    Won,
    Lost,
}

impl ChaseStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ChaseStatus::Won | ChaseStatus::Lost)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChaseState {
    pub player: Cell,
    pub pursuer: Cell,
    pub player_heading: Direction,
    pub pursuer_heading: Direction,
    pub dots_remaining: usize,
    pub score: u32,
    pub lives: u32,
    pub status: ChaseStatus,
}

impl ChaseState {
    /// Ready and Running both accept input; Won and Lost wait for a restart.
    pub fn is_running(&self) -> bool {
        !self.status.is_terminal()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChaseSnapshot {
    pub state: ChaseState,
    pub grid: Grid,
}
