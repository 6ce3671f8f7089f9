use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::time::Duration;
use common::best_scores::BestScores;
use common::games::SessionRng;
use common::games::grid_chase::{ChaseBotController, ChaseSettings, ChaseSimulation};
use common::games::snake::{SnakeBotController, SnakeSettings, SnakeSimulation};
use common::DEFAULT_CHASE_MAZE;

fn bench_chase_autopilot_200_ticks() {
    let Ok(mut simulation) = ChaseSimulation::from_lines(&DEFAULT_CHASE_MAZE, ChaseSettings::default()) else {
        return;
    };
    let mut session_rng = SessionRng::from_random();
    for _ in 0..200 {
        if !simulation.state().is_running() {
            simulation.restart();
        }
        if let Some(direction) = ChaseBotController::calculate_move(&simulation, &mut session_rng) {
            simulation.move_player(direction);
        }
        simulation.tick();
    }
}

fn bench_pursuer_ticks() {
    let Ok(mut simulation) = ChaseSimulation::from_lines(&DEFAULT_CHASE_MAZE, ChaseSettings::default()) else {
        return;
    };
    for _ in 0..1000 {
        if !simulation.tick() {
            simulation.restart();
        }
    }
}

fn bench_snake_autopilot_game() {
    let Ok(mut simulation) = SnakeSimulation::new(
        SnakeSettings::default(),
        SessionRng::from_random(),
        BestScores::default(),
    ) else {
        return;
    };
    let mut bot_rng = SessionRng::from_random();
    simulation.start();
    for _ in 0..2000 {
        if simulation.state().is_game_over() {
            break;
        }
        if let Some(direction) = SnakeBotController::calculate_move(&simulation, &mut bot_rng) {
            simulation.set_heading(direction);
        }
        simulation.tick();
    }
}

fn simulation_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("pursuer_1000_ticks", |b| {
        b.iter(bench_pursuer_ticks)
    });

    group.bench_function("chase_autopilot_200_ticks", |b| {
        b.iter(bench_chase_autopilot_200_ticks)
    });

    group.bench_function("snake_autopilot_game", |b| {
        b.iter(bench_snake_autopilot_game)
    });

    group.finish();
}

criterion_group!(benches, simulation_bench);
criterion_main!(benches);
