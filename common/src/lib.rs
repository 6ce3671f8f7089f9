pub mod best_scores;
pub mod config;
pub mod games;
pub mod logger;
mod defaults;

pub use defaults::*;
