use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, ValueEnum)]
pub enum GameType {
    Snake,
    Chase,
}
