mod bot_controller;
mod game_state;
mod settings;
mod snake;
mod types;

pub use bot_controller::SnakeBotController;
pub use game_state::SnakeSimulation;
pub use settings::{SnakeSettings, MAX_FIELD_SIZE, MIN_FIELD_SIZE};
pub use snake::SnakeBody;
pub use types::{GameOverReason, SnakeEvent, SnakeSnapshot, SnakeState, SnakeStatus, SpeedTier};
