mod bot_controller;
mod game_state;
mod grid;
mod settings;
mod types;

pub use bot_controller::ChaseBotController;
pub use game_state::ChaseSimulation;
pub use grid::{CellKind, Grid};
pub use settings::ChaseSettings;
pub use types::{ChaseSnapshot, ChaseState, ChaseStatus};
