mod config;
mod offline;

use std::path::PathBuf;

use clap::Parser;
use common::best_scores::{BestScoreBook, BestScoreStore};
use common::config::{ConfigManager, MemoryContentProvider, YamlConfigSerializer};
use common::games::SessionRng;
use common::{log, logger, warn};

use config::{get_config_manager, GameType};
use offline::{run_chase_game, run_snake_game, spawn_stdin_reader, ConsoleRenderer, RunOptions};

#[derive(Parser)]
#[command(name = "kids_arcade_runner")]
struct Args {
    /// Defaults to the game played last time.
    #[arg(long, value_enum)]
    game: Option<GameType>,
    #[arg(long)]
    autopilot: bool,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    max_ticks: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let config = config_manager.get_config()?;
    let game = args.game.or(config.last_game).unwrap_or(GameType::Snake);

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting {:?} with seed {}", game, rng.seed());

    let options = RunOptions {
        autopilot: args.autopilot,
        max_ticks: args.max_ticks,
    };
    let mut renderer = ConsoleRenderer::new(std::io::stdout());
    let mut command_rx = spawn_stdin_reader();

    match game {
        GameType::Snake => {
            let store: Box<dyn BestScoreStore> = if config.best_scores.save {
                Box::new(ConfigManager::<_, BestScoreBook>::from_yaml_file(
                    config.best_scores.file_path(),
                ))
            } else {
                Box::new(ConfigManager::<_, BestScoreBook>::new(
                    MemoryContentProvider::default(),
                    YamlConfigSerializer::new(),
                ))
            };
            let best = run_snake_game(
                config.snake.to_settings(),
                rng,
                options,
                &store,
                &mut renderer,
                &mut command_rx,
            )
            .await?;
            log!("Best so far: {} pies, length {}", best.pies, best.length);
        }
        GameType::Chase => {
            let simulation = config.chase.build_simulation()?;
            let status = run_chase_game(simulation, rng, options, &mut renderer, &mut command_rx).await?;
            log!("Chase ended: {:?}", status);
        }
    }

    if let Err(e) = config_manager.update(|config| config.last_game = Some(game)) {
        warn!("Failed to remember last game: {}", e);
    }

    Ok(())
}
