use std::time::Duration;

use crate::best_scores::BestScores;
use crate::games::{Cell, ConfigurationError, Direction, RandomSource, SessionRng};
use crate::log;
use super::settings::SnakeSettings;
use super::snake::SnakeBody;
use super::types::{GameOverReason, SnakeEvent, SnakeSnapshot, SnakeState, SnakeStatus, SpeedTier};

pub struct SnakeSimulation<R: RandomSource = SessionRng> {
    settings: SnakeSettings,
    rng: R,
    state: SnakeState,
    best: BestScores,
    best_at_start: BestScores,
}

impl<R: RandomSource> SnakeSimulation<R> {
    pub fn new(settings: SnakeSettings, rng: R, best: BestScores) -> Result<Self, ConfigurationError> {
        settings.validate()?;

        let state = initial_state(&settings);
        let mut simulation = Self {
            settings,
            rng,
            state,
            best,
            best_at_start: best,
        };
        simulation.place_food();
        Ok(simulation)
    }

    pub fn state(&self) -> &SnakeState {
        &self.state
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn best_scores(&self) -> BestScores {
        self.best
    }

    /// Advisory delay before the next tick; shrinks as pies are eaten.
    pub fn tick_interval(&self) -> Duration {
        self.state.tick_interval
    }

    pub fn speed_tier(&self) -> SpeedTier {
        SpeedTier::from_interval(self.state.tick_interval)
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            state: self.state.clone(),
            field_width: self.settings.field_width,
            field_height: self.settings.field_height,
            best: self.best,
        }
    }

    pub fn start(&mut self) -> bool {
        if self.state.status != SnakeStatus::Idle {
            return false;
        }
        self.state.status = SnakeStatus::Running;
        self.state.heading = Some(self.settings.start_heading);
        self.state.pending_heading = None;
        log!("Snake started heading {:?}", self.settings.start_heading);
        true
    }

    /// Queues a turn for the next tick. Reversing into the neck is ignored.
    pub fn set_heading(&mut self, direction: Direction) -> bool {
        if !self.state.is_running() {
            return false;
        }
        if let Some(current) = self.state.heading
            && direction.is_opposite(&current)
        {
            return false;
        }
        self.state.pending_heading = Some(direction);
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.state.status = match self.state.status {
            SnakeStatus::Running => SnakeStatus::Paused,
            SnakeStatus::Paused => SnakeStatus::Running,
            SnakeStatus::Idle | SnakeStatus::GameOver(_) => return false,
        };
        true
    }

    pub fn tick(&mut self) -> SnakeEvent {
        if self.state.status != SnakeStatus::Running {
            return SnakeEvent::Idle;
        }

        if let Some(pending) = self.state.pending_heading.take() {
            self.state.heading = Some(pending);
        }
        let Some(heading) = self.state.heading else {
            return SnakeEvent::Idle;
        };

        let next = self.state.body.head().step(heading);
        if !self.settings.contains(next) {
            return self.finish(GameOverReason::WallCollision);
        }
        if self.state.body.contains(next) {
            return self.finish(GameOverReason::SelfCollision);
        }

        self.state.body.push_head(next);

        if self.state.food != Some(next) {
            self.state.body.drop_tail();
            return SnakeEvent::Moved;
        }

        self.eat()
    }

    pub fn restart(&mut self) {
        self.state = initial_state(&self.settings);
        self.best_at_start = self.best;
        self.place_food();
    }

    fn eat(&mut self) -> SnakeEvent {
        self.state.score += self.settings.pie_reward;
        self.state.pies_eaten += 1;

        if self.state.pies_eaten % self.settings.speed_up_every == 0 {
            self.speed_up();
        }

        let new_personal_best = self.best.record(self.state.pies_eaten, self.state.body.len());

        if !self.place_food() {
            return self.finish(GameOverReason::BoardFilled);
        }

        SnakeEvent::AteFood { new_personal_best }
    }

    fn speed_up(&mut self) {
        let faster = self
            .state
            .tick_interval
            .saturating_sub(self.settings.interval_step)
            .max(self.settings.min_interval);
        if faster != self.state.tick_interval {
            self.state.tick_interval = faster;
            self.state.speed_level += 1;
            log!(
                "Snake sped up to {}ms after {} pies",
                faster.as_millis(),
                self.state.pies_eaten
            );
        }
    }

    fn finish(&mut self, reason: GameOverReason) -> SnakeEvent {
        self.state.status = SnakeStatus::GameOver(reason);
        self.best.record(self.state.pies_eaten, self.state.body.len());
        let new_personal_best = self.best != self.best_at_start;
        log!(
            "Snake game over ({:?}): {} pies, length {}",
            reason,
            self.state.pies_eaten,
            self.state.body.len()
        );
        SnakeEvent::GameOver {
            reason,
            new_personal_best,
        }
    }

    /// Picks a free cell uniformly. Returns `false` when the body fills the field.
    fn place_food(&mut self) -> bool {
        let free: Vec<Cell> = (0..self.settings.field_height as i32)
            .flat_map(|y| (0..self.settings.field_width as i32).map(move |x| Cell::new(x, y)))
            .filter(|cell| !self.state.body.contains(*cell))
            .collect();

        if free.is_empty() {
            self.state.food = None;
            return false;
        }

        self.state.food = Some(free[self.rng.next_index(free.len())]);
        true
    }

    #[cfg(test)]
    fn state_mut(&mut self) -> &mut SnakeState {
        &mut self.state
    }
}

fn initial_state(settings: &SnakeSettings) -> SnakeState {
    SnakeState {
        body: SnakeBody::new(&settings.start_body),
        food: None,
        heading: None,
        pending_heading: None,
        tick_interval: settings.base_interval,
        speed_level: 0,
        score: 0,
        pies_eaten: 0,
        status: SnakeStatus::Idle,
    }
}
