use std::io::BufRead;

use common::games::Direction;
use common::warn;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    Turn(Direction),
    Start,
    Pause,
    Restart,
    Quit,
}

impl PlayerCommand {
    pub fn parse(line: &str) -> Option<PlayerCommand> {
        let command = match line.trim().to_ascii_lowercase().as_str() {
            "w" | "up" => PlayerCommand::Turn(Direction::Up),
            "s" | "down" => PlayerCommand::Turn(Direction::Down),
            "a" | "left" => PlayerCommand::Turn(Direction::Left),
            "d" | "right" => PlayerCommand::Turn(Direction::Right),
            "go" | "start" => PlayerCommand::Start,
            "p" | "pause" => PlayerCommand::Pause,
            "r" | "restart" => PlayerCommand::Restart,
            "q" | "quit" => PlayerCommand::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Reads commands line by line on a plain thread; blocking stdin must not hold up runtime shutdown.
/// The channel closes when stdin does.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<PlayerCommand> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Failed to read stdin: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match PlayerCommand::parse(&line) {
                Some(command) => {
                    if command_tx.send(command).is_err() {
                        break;
                    }
                }
                None => warn!("Unknown command '{}'", line.trim()),
            }
        }
    });

    command_rx
}
