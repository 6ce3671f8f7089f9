use std::error::Error;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use common::best_scores::{BestScoreStore, BestScores, SNAKE_BEST_SCORES_KEY};
use common::games::snake::{
    SnakeBotController, SnakeEvent, SnakeSettings, SnakeSimulation, SnakeSnapshot,
};
use common::games::{SessionRng, SnapshotRenderer};
use common::{log, warn};

use super::{PlayerCommand, RunOptions};

struct SnakeFrame {
    event: SnakeEvent,
    snapshot: SnakeSnapshot,
}

/// Plays one snake session until quit, the tick budget runs out, or an autopilot game ends.
/// Returns the personal records as they stand at the end.
pub async fn run_snake_game(
    settings: SnakeSettings,
    rng: SessionRng,
    options: RunOptions,
    store: &impl BestScoreStore,
    renderer: &mut impl SnapshotRenderer<SnakeSnapshot>,
    command_rx: &mut mpsc::UnboundedReceiver<PlayerCommand>,
) -> Result<BestScores, Box<dyn Error>> {
    let best = store.load(SNAKE_BEST_SCORES_KEY).unwrap_or_else(|e| {
        warn!("Failed to load best scores: {}", e);
        BestScores::default()
    });
    let bot_rng = SessionRng::new(rng.seed().wrapping_add(1));

    let mut simulation = SnakeSimulation::new(settings, rng, best)?;
    if options.autopilot {
        simulation.start();
    }
    renderer.render(&simulation.snapshot());

    let simulation = Arc::new(Mutex::new(simulation));
    let (frame_tx, mut frame_rx) = mpsc::unbounded_channel();
    let mut tick_handle = tokio::spawn(run_ticks(simulation.clone(), bot_rng, options, frame_tx));

    loop {
        tokio::select! {
            _ = &mut tick_handle => {
                break;
            }
            Some(frame) = frame_rx.recv() => {
                show_frame(frame, store, renderer);
            }
            Some(command) = command_rx.recv() => {
                if command == PlayerCommand::Quit {
                    log!("Snake quit by player");
                    break;
                }
                let snapshot = {
                    let mut game = simulation.lock().await;
                    apply_command(&mut game, command).then(|| game.snapshot())
                };
                if let Some(snapshot) = snapshot {
                    renderer.render(&snapshot);
                }
            }
        }
    }

    tick_handle.abort();
    while let Ok(frame) = frame_rx.try_recv() {
        show_frame(frame, store, renderer);
    }

    let best = simulation.lock().await.best_scores();
    save_best(store, &best);
    Ok(best)
}

async fn run_ticks(
    simulation: Arc<Mutex<SnakeSimulation>>,
    mut bot_rng: SessionRng,
    options: RunOptions,
    frame_tx: mpsc::UnboundedSender<SnakeFrame>,
) {
    let mut ticks = 0u64;
    loop {
        let delay = simulation.lock().await.tick_interval();
        tokio::time::sleep(delay).await;

        let mut game = simulation.lock().await;
        if options.autopilot
            && let Some(direction) = SnakeBotController::calculate_move(&*game, &mut bot_rng)
        {
            game.set_heading(direction);
        }

        let event = game.tick();
        ticks += 1;

        if event != SnakeEvent::Idle {
            let frame = SnakeFrame {
                event,
                snapshot: game.snapshot(),
            };
            if frame_tx.send(frame).is_err() {
                break;
            }
        }

        if options.autopilot && game.state().is_game_over() {
            break;
        }
        if options.tick_budget_spent(ticks) {
            log!("Snake stopped after {} ticks", ticks);
            break;
        }
    }
}

fn apply_command(simulation: &mut SnakeSimulation, command: PlayerCommand) -> bool {
    match command {
        PlayerCommand::Turn(direction) => simulation.set_heading(direction),
        PlayerCommand::Start => simulation.start(),
        PlayerCommand::Pause => simulation.toggle_pause(),
        PlayerCommand::Restart => {
            simulation.restart();
            true
        }
        PlayerCommand::Quit => false,
    }
}

fn show_frame(
    frame: SnakeFrame,
    store: &impl BestScoreStore,
    renderer: &mut impl SnapshotRenderer<SnakeSnapshot>,
) {
    renderer.render(&frame.snapshot);

    match frame.event {
        SnakeEvent::AteFood { new_personal_best: true } => {
            log!("New personal best: {} pies", frame.snapshot.state.pies_eaten);
        }
        SnakeEvent::GameOver { new_personal_best, .. } => {
            if new_personal_best {
                log!(
                    "Game over with a new personal best: {} pies, length {}",
                    frame.snapshot.best.pies,
                    frame.snapshot.best.length
                );
            }
            save_best(store, &frame.snapshot.best);
        }
        _ => {}
    }
}

fn save_best(store: &impl BestScoreStore, best: &BestScores) {
    if let Err(e) = store.save(SNAKE_BEST_SCORES_KEY, best) {
        warn!("Failed to save best scores: {}", e);
    }
}
