mod best_scores_config;
mod chase_config;
mod game_type;
mod main_config;
mod snake_config;

pub use best_scores_config::BestScoresConfig;
pub use chase_config::ChaseConfig;
pub use game_type::GameType;
pub use main_config::{get_config_manager, Config};
pub use snake_config::SnakeConfig;
