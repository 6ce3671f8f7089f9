use std::time::Duration;

use crate::games::{Cell, ConfigurationError, Direction};
use crate::log;
use super::grid::Grid;
use super::settings::ChaseSettings;
use super::types::{ChaseSnapshot, ChaseState, ChaseStatus};

/// One maze, one player, one greedy pursuer.
pub struct ChaseSimulation {
    pristine_grid: Grid,
    grid: Grid,
    settings: ChaseSettings,
    state: ChaseState,
}

impl ChaseSimulation {
    pub fn new(grid: Grid, settings: ChaseSettings) -> Result<Self, ConfigurationError> {
        if settings.initial_lives == 0 {
            return Err(ConfigurationError::InvalidSettings(
                "initial lives must be at least 1".to_string(),
            ));
        }
        if grid.dot_count() == 0 {
            return Err(ConfigurationError::InvalidGrid("grid has no dots".to_string()));
        }
        validate_start(&grid, settings.player_start, "player")?;
        validate_start(&grid, settings.pursuer_start, "pursuer")?;
        if settings.player_start == settings.pursuer_start {
            return Err(ConfigurationError::InvalidStart {
                cell: settings.player_start,
                reason: "player and pursuer cannot share a start cell".to_string(),
            });
        }

        let state = initial_state(&grid, &settings);
        Ok(Self {
            pristine_grid: grid.clone(),
            grid,
            settings,
            state,
        })
    }

    pub fn from_lines<S: AsRef<str>>(
        lines: &[S],
        settings: ChaseSettings,
    ) -> Result<Self, ConfigurationError> {
        Self::new(Grid::parse(lines)?, settings)
    }

    pub fn state(&self) -> &ChaseState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn settings(&self) -> &ChaseSettings {
        &self.settings
    }

    pub fn tick_interval(&self) -> Duration {
        self.settings.tick_interval
    }

    pub fn snapshot(&self) -> ChaseSnapshot {
        ChaseSnapshot {
            state: self.state.clone(),
            grid: self.grid.clone(),
        }
    }

    /// Returns whether the player moved. Walls, edges and finished games are no-ops.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        if !self.begin() {
            return false;
        }

        let destination = self.state.player.step(direction);
        if !self.grid.is_walkable(destination) {
            return false;
        }

        self.state.player = destination;
        self.state.player_heading = direction;

        if self.grid.take_dot(destination) {
            self.state.score += self.settings.dot_reward;
            self.state.dots_remaining = self.state.dots_remaining.saturating_sub(1);

            if self.state.dots_remaining == 0 {
                self.state.status = ChaseStatus::Won;
                log!("Chase won with score {}", self.state.score);
                return true;
            }
        }

        self.resolve_collision();
        true
    }

    /// Advances the pursuer one cell. Returns whether it moved.
    pub fn tick(&mut self) -> bool {
        if !self.begin() {
            return false;
        }

        let Some((direction, next)) = self.choose_pursuer_move() else {
            return false;
        };

        self.state.pursuer = next;
        self.state.pursuer_heading = direction;
        self.resolve_collision();
        true
    }

    /// Greedy, memoryless choice: the legal neighbour closest to the player,
    /// first in `Direction::PRIORITY` on ties.
    pub fn choose_pursuer_move(&self) -> Option<(Direction, Cell)> {
        let target = self.state.player;
        Direction::PRIORITY
            .iter()
            .map(|&direction| (direction, self.state.pursuer.step(direction)))
            .filter(|(_, cell)| self.grid.is_walkable(*cell))
            .min_by_key(|(_, cell)| cell.manhattan_distance(target))
    }

    pub fn restart(&mut self) {
        self.grid = self.pristine_grid.clone();
        self.state = initial_state(&self.grid, &self.settings);
        log!("Chase restarted with {} dots", self.state.dots_remaining);
    }

    fn begin(&mut self) -> bool {
        match self.state.status {
            ChaseStatus::Ready => {
                self.state.status = ChaseStatus::Running;
                true
            }
            ChaseStatus::Running => true,
            ChaseStatus::Won | ChaseStatus::Lost => false,
        }
    }

    fn resolve_collision(&mut self) {
        if self.state.player != self.state.pursuer {
            return;
        }

        self.state.lives = self.state.lives.saturating_sub(1);
        if self.state.lives == 0 {
            self.state.status = ChaseStatus::Lost;
            log!("Chase lost at {} with score {}", self.state.player, self.state.score);
            return;
        }

        log!("Caught at {}, {} lives left", self.state.player, self.state.lives);
        self.state.player = self.settings.player_start;
        self.state.pursuer = self.settings.pursuer_start;
    }

    #[cfg(test)]
    fn state_mut(&mut self) -> &mut ChaseState {
        &mut self.state
    }
}

fn validate_start(grid: &Grid, cell: Cell, who: &str) -> Result<(), ConfigurationError> {
    if !grid.contains(cell) {
        return Err(ConfigurationError::InvalidStart {
            cell,
            reason: format!("{} start is outside the grid", who),
        });
    }
    if !grid.is_walkable(cell) {
        return Err(ConfigurationError::InvalidStart {
            cell,
            reason: format!("{} start is a wall", who),
        });
    }
    Ok(())
}

fn initial_state(grid: &Grid, settings: &ChaseSettings) -> ChaseState {
    ChaseState {
        player: settings.player_start,
        pursuer: settings.pursuer_start,
        player_heading: Direction::Right,
        pursuer_heading: Direction::Up,
        dots_remaining: grid.dot_count(),
        score: 0,
        lives: settings.initial_lives,
        status: ChaseStatus::Ready,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::grid_chase::CellKind;
    use crate::DEFAULT_CHASE_MAZE;

    fn default_simulation() -> ChaseSimulation {
        ChaseSimulation::from_lines(&DEFAULT_CHASE_MAZE, ChaseSettings::default()).unwrap()
    }

    fn settings(player: (i32, i32), pursuer: (i32, i32)) -> ChaseSettings {
        ChaseSettings {
            player_start: Cell::new(player.0, player.1),
            pursuer_start: Cell::new(pursuer.0, pursuer.1),
            ..ChaseSettings::default()
        }
    }

    #[test]
    fn test_initialize_counts_dots() {
        let simulation = default_simulation();
        let state = simulation.state();
        assert_eq!(state.dots_remaining, simulation.grid().dot_count());
        assert_eq!(state.dots_remaining, 150);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.status, ChaseStatus::Ready);
        assert!(state.is_running());
    }

    #[test]
    fn test_start_on_wall_rejected() {
        let result = ChaseSimulation::from_lines(&DEFAULT_CHASE_MAZE, settings((0, 0), (9, 9)));
        assert!(matches!(result, Err(ConfigurationError::InvalidStart { .. })));
    }

    #[test]
    fn test_start_out_of_bounds_rejected() {
        let result = ChaseSimulation::from_lines(&DEFAULT_CHASE_MAZE, settings((9, 15), (40, 9)));
        assert!(matches!(result, Err(ConfigurationError::InvalidStart { .. })));
    }

    #[test]
    fn test_shared_start_rejected() {
        let result = ChaseSimulation::from_lines(&DEFAULT_CHASE_MAZE, settings((9, 9), (9, 9)));
        assert!(matches!(result, Err(ConfigurationError::InvalidStart { .. })));
    }

    #[test]
    fn test_zero_lives_rejected() {
        let settings = ChaseSettings {
            initial_lives: 0,
            ..ChaseSettings::default()
        };
        let result = ChaseSimulation::from_lines(&DEFAULT_CHASE_MAZE, settings);
        assert!(matches!(result, Err(ConfigurationError::InvalidSettings(_))));
    }

    #[test]
    fn test_maze_without_dots_rejected() {
        let starts = settings((0, 0), (4, 0));
        let result = ChaseSimulation::from_lines(&["_____"], starts.clone());
        assert!(matches!(result, Err(ConfigurationError::InvalidGrid(_))));

        let result = ChaseSimulation::from_lines(&["_____", "#.###"], starts);
        assert_eq!(result.unwrap().state().dots_remaining, 1);
    }

    #[test]
    fn test_bad_grid_rejected() {
        let result = ChaseSimulation::from_lines(&["#.", "#"], ChaseSettings::default());
        assert!(matches!(result, Err(ConfigurationError::InvalidGrid(_))));
    }

    #[test]
    fn test_pursuer_first_tick_on_default_maze() {
        let mut simulation = default_simulation();
        assert!(simulation.tick());
        // Down leaves the pursuer 5 away from (9, 15); every other neighbour is 7 away.
        assert_eq!(simulation.state().pursuer, Cell::new(9, 10));
        assert_eq!(simulation.state().pursuer_heading, Direction::Down);
        assert_eq!(simulation.state().status, ChaseStatus::Running);
    }

    #[test]
    fn test_pursuer_tie_prefers_up_then_down_then_left() {
        // Player diagonal to the pursuer: two neighbours are equally close.
        let lines = ["____.", "_____", "_____", "_____", "_____"];
        let mut simulation = ChaseSimulation::from_lines(&lines, settings((0, 0), (2, 2))).unwrap();
        assert_eq!(
            simulation.choose_pursuer_move(),
            Some((Direction::Up, Cell::new(2, 1)))
        );

        let mut mirrored = ChaseSimulation::from_lines(&lines, settings((0, 4), (2, 2))).unwrap();
        assert_eq!(
            mirrored.choose_pursuer_move(),
            Some((Direction::Down, Cell::new(2, 3)))
        );

        assert!(simulation.tick());
        assert!(mirrored.tick());
    }

    #[test]
    fn test_pursuer_choice_is_minimal_among_legal_neighbours() {
        let mut simulation = default_simulation();
        for _ in 0..30 {
            if !simulation.state().is_running() {
                break;
            }
            let target = simulation.state().player;
            let from = simulation.state().pursuer;
            let best = Direction::PRIORITY
                .iter()
                .map(|d| from.step(*d))
                .filter(|c| simulation.grid().is_walkable(*c))
                .map(|c| c.manhattan_distance(target))
                .min();
            let chosen = simulation.choose_pursuer_move().map(|(_, c)| c.manhattan_distance(target));
            assert_eq!(chosen, best);
            simulation.tick();
        }
    }

    #[test]
    fn test_boxed_in_pursuer_stays() {
        let lines = ["#####", "#_#.#", "#####"];
        let mut simulation = ChaseSimulation::from_lines(&lines, settings((3, 1), (1, 1))).unwrap();
        assert_eq!(simulation.choose_pursuer_move(), None);
        assert!(!simulation.tick());
        assert_eq!(simulation.state().pursuer, Cell::new(1, 1));
    }

    #[test]
    fn test_move_into_wall_is_noop() {
        let mut simulation = default_simulation();
        // (9, 14) is a wall right above the player start.
        assert_eq!(simulation.grid().get(Cell::new(9, 14)), Some(CellKind::Wall));
        let before = simulation.state().clone();
        assert!(!simulation.move_player(Direction::Up));
        assert_eq!(simulation.state().player, before.player);
        assert_eq!(simulation.state().score, before.score);
    }

    #[test]
    fn test_move_out_of_bounds_is_noop() {
        let lines = ["__."];
        let mut simulation = ChaseSimulation::from_lines(&lines, settings((0, 0), (2, 0))).unwrap();
        assert!(!simulation.move_player(Direction::Left));
        assert!(!simulation.move_player(Direction::Up));
        assert_eq!(simulation.state().player, Cell::new(0, 0));
    }

    #[test]
    fn test_eating_dots_scores_and_counts_down() {
        let mut simulation = default_simulation();
        let dots = simulation.state().dots_remaining;

        // (10, 15) has a dot, stepping back onto (9, 15) does not.
        assert!(simulation.move_player(Direction::Right));
        assert_eq!(simulation.state().player_heading, Direction::Right);
        assert_eq!(simulation.state().score, 10);
        assert_eq!(simulation.state().dots_remaining, dots - 1);

        assert!(simulation.move_player(Direction::Left));
        assert!(simulation.move_player(Direction::Right));
        assert_eq!(simulation.state().score, 10);
        assert_eq!(simulation.state().dots_remaining, dots - 1);
        assert_eq!(simulation.grid().get(Cell::new(10, 15)), Some(CellKind::PathEmpty));
    }

    #[test]
    fn test_last_dot_wins() {
        let lines = ["#####", "#_.##", "#_###", "#_###", "#####"];
        let mut simulation = ChaseSimulation::from_lines(&lines, settings((1, 1), (1, 3))).unwrap();
        assert_eq!(simulation.state().dots_remaining, 1);

        assert!(simulation.move_player(Direction::Right));
        let state = simulation.state();
        assert_eq!(state.status, ChaseStatus::Won);
        assert!(!state.is_running());
        assert_eq!(state.score, 10);
        assert_eq!(state.dots_remaining, 0);
    }

    #[test]
    fn test_collision_costs_a_life_and_resets_positions() {
        let lines = ["._._."];
        let mut simulation = ChaseSimulation::from_lines(&lines, settings((0, 0), (4, 0))).unwrap();

        assert!(simulation.move_player(Direction::Right));
        assert!(simulation.move_player(Direction::Right));
        assert!(simulation.move_player(Direction::Right));
        // Player now on (3, 0), pursuer on (4, 0); the tick walks into the player.
        assert!(simulation.tick());

        let state = simulation.state();
        assert_eq!(state.lives, 2);
        assert_eq!(state.player, Cell::new(0, 0));
        assert_eq!(state.pursuer, Cell::new(4, 0));
        assert_eq!(state.player_heading, Direction::Right);
        assert_eq!(state.pursuer_heading, Direction::Left);
        assert_eq!(state.status, ChaseStatus::Running);
        // Dots eaten before the catch stay eaten.
        assert_eq!(state.dots_remaining, 2);
        assert_eq!(simulation.grid().get(Cell::new(2, 0)), Some(CellKind::PathEmpty));
    }

    #[test]
    fn test_player_walking_into_pursuer_collides() {
        let lines = ["___."];
        let mut simulation = ChaseSimulation::from_lines(&lines, settings((0, 0), (1, 0))).unwrap();
        assert!(simulation.move_player(Direction::Right));
        assert_eq!(simulation.state().lives, 2);
        assert_eq!(simulation.state().player, Cell::new(0, 0));
    }

    #[test]
    fn test_last_life_loses_and_freezes() {
        let lines = ["___."];
        let mut simulation = ChaseSimulation::from_lines(&lines, settings((0, 0), (1, 0))).unwrap();
        simulation.state_mut().lives = 1;

        assert!(simulation.move_player(Direction::Right));
        assert_eq!(simulation.state().status, ChaseStatus::Lost);
        assert_eq!(simulation.state().lives, 0);

        let frozen = simulation.snapshot();
        assert!(!simulation.tick());
        assert!(!simulation.move_player(Direction::Left));
        assert_eq!(simulation.snapshot(), frozen);
    }

    #[test]
    fn test_tick_after_win_never_mutates() {
        let lines = ["_.__"];
        let mut simulation = ChaseSimulation::from_lines(&lines, settings((0, 0), (3, 0))).unwrap();
        assert!(simulation.move_player(Direction::Right));
        assert_eq!(simulation.state().status, ChaseStatus::Won);

        let frozen = simulation.snapshot();
        for _ in 0..5 {
            assert!(!simulation.tick());
        }
        assert_eq!(simulation.snapshot(), frozen);
    }

    #[test]
    fn test_restart_restores_dots_lives_and_score() {
        let mut simulation = default_simulation();
        simulation.move_player(Direction::Right);
        simulation.move_player(Direction::Right);
        simulation.state_mut().lives = 1;
        assert!(simulation.state().score > 0);

        simulation.restart();
        let state = simulation.state();
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.dots_remaining, 150);
        assert_eq!(state.player, Cell::new(9, 15));
        assert_eq!(state.pursuer, Cell::new(9, 9));
        assert_eq!(state.status, ChaseStatus::Ready);
        assert_eq!(simulation.grid().get(Cell::new(10, 15)), Some(CellKind::PathWithDot));
    }
}
