use std::collections::{HashMap, HashSet, VecDeque};

use crate::games::{Cell, Direction, RandomSource};
use super::game_state::ChaseSimulation;
use super::grid::CellKind;

/// Steers the player on autopilot: shortest walk to the nearest dot that keeps
/// clear of the pursuer and its neighbours.
pub struct ChaseBotController;

impl ChaseBotController {
    pub fn calculate_move(
        simulation: &ChaseSimulation,
        rng: &mut impl RandomSource,
    ) -> Option<Direction> {
        let state = simulation.state();
        if !state.is_running() {
            return None;
        }

        let danger = Self::danger_zone(simulation);
        Self::first_step_to_dot(simulation, &danger)
            .or_else(|| Self::first_step_to_dot(simulation, &HashSet::from([state.pursuer])))
            .or_else(|| Self::random_safe_move(simulation, &danger, rng))
    }

    fn danger_zone(simulation: &ChaseSimulation) -> HashSet<Cell> {
        let pursuer = simulation.state().pursuer;
        Direction::PRIORITY
            .iter()
            .map(|direction| pursuer.step(*direction))
            .chain(std::iter::once(pursuer))
            .collect()
    }

    fn first_step_to_dot(simulation: &ChaseSimulation, blocked: &HashSet<Cell>) -> Option<Direction> {
        let grid = simulation.grid();
        let start = simulation.state().player;

        let mut first_steps: HashMap<Cell, Direction> = HashMap::new();
        let mut queue = VecDeque::new();

        for direction in Direction::PRIORITY {
            let next = start.step(direction);
            if grid.is_walkable(next) && !blocked.contains(&next) && !first_steps.contains_key(&next) {
                first_steps.insert(next, direction);
                queue.push_back(next);
            }
        }

        while let Some(cell) = queue.pop_front() {
            let Some(&first) = first_steps.get(&cell) else {
                continue;
            };
            if grid.get(cell) == Some(CellKind::PathWithDot) {
                return Some(first);
            }

            for direction in Direction::PRIORITY {
                let next = cell.step(direction);
                if next == start
                    || !grid.is_walkable(next)
                    || blocked.contains(&next)
                    || first_steps.contains_key(&next)
                {
                    continue;
                }
                first_steps.insert(next, first);
                queue.push_back(next);
            }
        }

        None
    }

    fn random_safe_move(
        simulation: &ChaseSimulation,
        danger: &HashSet<Cell>,
        rng: &mut impl RandomSource,
    ) -> Option<Direction> {
        let player = simulation.state().player;
        let legal: Vec<Direction> = Direction::PRIORITY
            .into_iter()
            .filter(|direction| simulation.grid().is_walkable(player.step(*direction)))
            .collect();
        let safe: Vec<Direction> = legal
            .iter()
            .copied()
            .filter(|direction| !danger.contains(&player.step(*direction)))
            .collect();

        let candidates = if safe.is_empty() { legal } else { safe };
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.next_index(candidates.len())])
    }
}
