pub mod grid_chase;
pub mod snake;

mod renderer;
mod session_rng;
mod types;

pub use renderer::{RecordingRenderer, SnapshotRenderer};
pub use session_rng::{RandomSource, ScriptedRng, SessionRng};
pub use types::{Cell, ConfigurationError, Direction};
