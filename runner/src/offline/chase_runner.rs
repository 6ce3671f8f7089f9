use std::error::Error;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use common::games::grid_chase::{ChaseBotController, ChaseSimulation, ChaseSnapshot, ChaseStatus};
use common::games::{SessionRng, SnapshotRenderer};
use common::log;

use super::{PlayerCommand, RunOptions};

/// Plays one chase session. The pursuer waits for the player's first move unless the autopilot plays.
pub async fn run_chase_game(
    simulation: ChaseSimulation,
    bot_rng: SessionRng,
    options: RunOptions,
    renderer: &mut impl SnapshotRenderer<ChaseSnapshot>,
    command_rx: &mut mpsc::UnboundedReceiver<PlayerCommand>,
) -> Result<ChaseStatus, Box<dyn Error>> {
    renderer.render(&simulation.snapshot());

    let simulation = Arc::new(Mutex::new(simulation));
    let (frame_tx, mut frame_rx) = mpsc::unbounded_channel();
    let mut tick_handle = tokio::spawn(run_ticks(simulation.clone(), bot_rng, options, frame_tx));

    loop {
        tokio::select! {
            _ = &mut tick_handle => {
                break;
            }
            Some(snapshot) = frame_rx.recv() => {
                renderer.render(&snapshot);
            }
            Some(command) = command_rx.recv() => {
                if command == PlayerCommand::Quit {
                    log!("Chase quit by player");
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
    while let Ok(snapshot) = frame_rx.try_recv() {
        renderer.render(&snapshot);
    }

    let status = simulation.lock().await.state().status;
    Ok(status)
}

async fn run_ticks(
    simulation: Arc<Mutex<ChaseSimulation>>,
    mut bot_rng: SessionRng,
    options: RunOptions,
    frame_tx: mpsc::UnboundedSender<ChaseSnapshot>,
) {
    let mut ticks = 0u64;
    loop {
        let delay = simulation.lock().await.tick_interval();
        tokio::time::sleep(delay).await;

        let mut game = simulation.lock().await;
        ticks += 1;

        // Waiting ticks still count toward the budget.
        let waiting = !options.autopilot && game.state().status == ChaseStatus::Ready;
        if !waiting {
            let mut changed = false;
            if options.autopilot
                && let Some(direction) = ChaseBotController::calculate_move(&game, &mut bot_rng)
            {
                changed |= game.move_player(direction);
            }
            changed |= game.tick();

            if changed && frame_tx.send(game.snapshot()).is_err() {
                break;
            }

            if options.autopilot && game.state().status.is_terminal() {
                log!(
                    "Autopilot finished: {:?} with score {}",
                    game.state().status,
                    game.state().score
                );
                break;
            }
        }
        if options.tick_budget_spent(ticks) {
            log!("Chase stopped after {} ticks", ticks);
            break;
        }
    }
}

fn apply_command(simulation: &mut ChaseSimulation, command: PlayerCommand) -> bool {
    match command {
        PlayerCommand::Turn(direction) => simulation.move_player(direction),
        PlayerCommand::Restart => {
            simulation.restart();
            true
        }
        PlayerCommand::Start | PlayerCommand::Pause | PlayerCommand::Quit => false,
    }
}
