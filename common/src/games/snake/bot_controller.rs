use crate::games::{Cell, Direction, RandomSource};
use super::game_state::SnakeSimulation;

pub struct SnakeBotController;

impl SnakeBotController {
    /// Next heading for the autopilot, or `None` when the game is not running.
    pub fn calculate_move<R: RandomSource>(
        simulation: &SnakeSimulation<R>,
        rng: &mut impl RandomSource,
    ) -> Option<Direction> {
        let state = simulation.state();
        if !state.is_running() {
            return None;
        }
        let current = state.heading?;

        let safe = Self::safe_directions(simulation, current);

        let toward_food = state.food.and_then(|food| {
            safe.iter()
                .copied()
                .min_by_key(|direction| state.body.head().step(*direction).manhattan_distance(food))
        });

        toward_food
            .or_else(|| {
                (!safe.is_empty()).then(|| safe[rng.next_index(safe.len())])
            })
            .or(Some(current))
    }

    fn safe_directions<R: RandomSource>(
        simulation: &SnakeSimulation<R>,
        current: Direction,
    ) -> Vec<Direction> {
        let head = simulation.state().body.head();
        Direction::PRIORITY
            .into_iter()
            .filter(|direction| !direction.is_opposite(&current))
            .filter(|direction| Self::is_safe(simulation, head.step(*direction)))
            .collect()
    }

    // The tail cell counts as occupied: the simulation checks it before the tail moves.
    fn is_safe<R: RandomSource>(simulation: &SnakeSimulation<R>, cell: Cell) -> bool {
        simulation.settings().contains(cell) && !simulation.state().body.contains(cell)
    }
}
