use std::io::Write;

use common::games::grid_chase::{CellKind, ChaseSnapshot, ChaseStatus};
use common::games::snake::{GameOverReason, SnakeSnapshot, SnakeStatus, SpeedTier};
use common::games::{Cell, SnapshotRenderer};
use common::warn;

/// Draws ASCII frames to any writer, stdout in the runner.
pub struct ConsoleRenderer<W: Write> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_frame(&mut self, lines: &[String]) {
        let mut frame = lines.join("\n");
        frame.push('\n');
        if let Err(e) = self
            .out
            .write_all(frame.as_bytes())
            .and_then(|_| self.out.flush())
        {
            warn!("Failed to draw frame: {}", e);
        }
    }
}

impl<W: Write> SnapshotRenderer<SnakeSnapshot> for ConsoleRenderer<W> {
    fn render(&mut self, snapshot: &SnakeSnapshot) {
        self.write_frame(&draw_snake(snapshot));
    }
}

impl<W: Write> SnapshotRenderer<ChaseSnapshot> for ConsoleRenderer<W> {
    fn render(&mut self, snapshot: &ChaseSnapshot) {
        self.write_frame(&draw_chase(snapshot));
    }
}

pub fn draw_snake(snapshot: &SnakeSnapshot) -> Vec<String> {
    let state = &snapshot.state;
    let head = state.body.head();

    let mut lines = vec![format!(
        "Pies: {}  Length: {}  Score: {}  Best: {} pies / {} long  Speed: {}  [{}]",
        state.pies_eaten,
        state.body.len(),
        state.score,
        snapshot.best.pies,
        snapshot.best.length,
        speed_label(SpeedTier::from_interval(state.tick_interval)),
        snake_status_label(state.status),
    )];

    let border = format!("+{}+", "-".repeat(snapshot.field_width));
    lines.push(border.clone());
    for y in 0..snapshot.field_height as i32 {
        let row: String = (0..snapshot.field_width as i32)
            .map(|x| {
                let cell = Cell::new(x, y);
                if cell == head {
                    '@'
                } else if state.body.contains(cell) {
                    'o'
                } else if state.food == Some(cell) {
                    '*'
                } else {
                    ' '
                }
            })
            .collect();
        lines.push(format!("|{}|", row));
    }
    lines.push(border);
    lines
}

pub fn draw_chase(snapshot: &ChaseSnapshot) -> Vec<String> {
    let state = &snapshot.state;

    let mut lines = vec![format!(
        "Score: {}  Lives: {}  Dots left: {}  [{}]",
        state.score,
        state.lives,
        state.dots_remaining,
        chase_status_label(state.status),
    )];

    for (y, row) in snapshot.grid.rows().enumerate() {
        let line: String = row
            .iter()
            .enumerate()
            .map(|(x, kind)| {
                let cell = Cell::new(x as i32, y as i32);
                if cell == state.pursuer {
                    'G'
                } else if cell == state.player {
                    'C'
                } else {
                    match kind {
                        CellKind::Wall => '#',
                        CellKind::PathWithDot => '.',
                        CellKind::PathEmpty => ' ',
                    }
                }
            })
            .collect();
        lines.push(line);
    }
    lines
}

fn speed_label(tier: SpeedTier) -> &'static str {
    match tier {
        SpeedTier::Normal => "normal",
        SpeedTier::Fast => "fast",
        SpeedTier::VeryFast => "very fast",
    }
}

fn snake_status_label(status: SnakeStatus) -> &'static str {
    match status {
        SnakeStatus::Idle => "type 'go' to start",
        SnakeStatus::Running => "running",
        SnakeStatus::Paused => "paused",
        SnakeStatus::GameOver(GameOverReason::WallCollision) => "hit the wall",
        SnakeStatus::GameOver(GameOverReason::SelfCollision) => "bit itself",
        SnakeStatus::GameOver(GameOverReason::BoardFilled) => "board filled, you win",
    }
}

fn chase_status_label(status: ChaseStatus) -> &'static str {
    match status {
        ChaseStatus::Ready => "ready",
        ChaseStatus::Running => "running",
        ChaseStatus::Won => "all dots eaten, you win",
        ChaseStatus::Lost => "caught, game over",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::best_scores::BestScores;
    use common::games::grid_chase::{ChaseSettings, ChaseSimulation};
    use common::games::snake::{SnakeSettings, SnakeSimulation};
    use common::games::{RecordingRenderer, ScriptedRng};

    fn snake_snapshot() -> SnakeSnapshot {
        let settings = SnakeSettings {
            field_width: 6,
            field_height: 4,
            start_body: vec![Cell::new(3, 1), Cell::new(2, 1), Cell::new(1, 1)],
            ..SnakeSettings::default()
        };
        SnakeSimulation::new(settings, ScriptedRng::new([0]), BestScores::default())
            .unwrap()
            .snapshot()
    }

    #[test]
    fn test_draws_snake_field() {
        let lines = draw_snake(&snake_snapshot());
        assert_eq!(
            &lines[1..],
            &[
                "+------+",
                "|*     |",
                "| oo@  |",
                "|      |",
                "|      |",
                "+------+",
            ]
        );
        assert!(lines[0].contains("Pies: 0"));
        assert!(lines[0].contains("'go'"));
    }

    #[test]
    fn test_draws_chase_maze() {
        let settings = ChaseSettings {
            player_start: Cell::new(1, 1),
            pursuer_start: Cell::new(3, 1),
            ..ChaseSettings::default()
        };
        let simulation =
            ChaseSimulation::from_lines(&["#####", "#._.#", "#####"], settings).unwrap();
        let lines = draw_chase(&simulation.snapshot());
        assert_eq!(&lines[1..], &["#####", "#C G#", "#####"]);
        assert!(lines[0].contains("Lives: 3"));
    }

    #[test]
    fn test_console_renderer_writes_whole_frame() {
        let mut renderer = ConsoleRenderer::new(Vec::new());
        let snapshot = snake_snapshot();
        renderer.render(&snapshot);
        let written = String::from_utf8(renderer.out).unwrap();
        assert_eq!(written.lines().count(), 7);
    }

    #[test]
    fn test_recording_renderer_keeps_frames() {
        let mut recorder = RecordingRenderer::default();
        let snapshot = snake_snapshot();
        recorder.render(&snapshot);
        recorder.render(&snapshot);
        assert_eq!(recorder.frames.len(), 2);
    }
}
