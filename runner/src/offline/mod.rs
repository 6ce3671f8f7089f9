mod chase_runner;
mod console_renderer;
mod input;
mod snake_runner;

pub use chase_runner::run_chase_game;
pub use console_renderer::ConsoleRenderer;
pub use input::{spawn_stdin_reader, PlayerCommand};
pub use snake_runner::run_snake_game;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// A bot steers the player; the run ends once the game does.
    pub autopilot: bool,
    pub max_ticks: Option<u64>,
}

impl RunOptions {
    fn tick_budget_spent(&self, ticks: u64) -> bool {
        self.max_ticks.is_some_and(|max| ticks >= max)
    }
}
