//! Integration test: the simulation loop.
//!
//! Drives `run_loop` with scripted input, a presenter that keeps the text of
//! every frame, and a clock that never sleeps.

use flappy::clock::Clock;
use flappy::input::InputSource;
use flappy::ui::{DisplayList, DrawCommand, Presenter, Sprite};
use flappy::{run_loop, GameConfig, GameInput, Session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::style::Color;
use std::collections::VecDeque;
use std::io;

/// Hands out one batch of inputs per tick, then quits.
struct ScriptedInput {
    ticks: VecDeque<Vec<GameInput>>,
}

impl ScriptedInput {
    fn new(ticks: Vec<Vec<GameInput>>) -> Self {
        Self {
            ticks: ticks.into(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn drain(&mut self) -> io::Result<Vec<GameInput>> {
        Ok(self.ticks.pop_front().unwrap_or_else(|| vec![GameInput::Quit]))
    }
}

/// Records the text and image count of each presented frame.
#[derive(Default)]
struct RecordingPresenter {
    frames: Vec<Vec<String>>,
    images: usize,
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, frame: &DisplayList) -> io::Result<()> {
        self.frames
            .push(frame.texts().map(str::to_string).collect());
        self.images += frame
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Image { .. }))
            .count();
        Ok(())
    }
}

/// Counts ticks instead of sleeping.
#[derive(Default)]
struct NoopClock {
    ticks: u64,
}

impl Clock for NoopClock {
    fn tick(&mut self) {
        self.ticks += 1;
    }
}

struct FailingInput;

impl InputSource for FailingInput {
    fn drain(&mut self) -> io::Result<Vec<GameInput>> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"))
    }
}

fn session() -> Session {
    let sprite = Sprite::from_pixels(1, 1, vec![Some(Color::Yellow)], 80.0, 60.0);
    Session::new(GameConfig::default(), sprite)
}

/// Enough idle ticks for a free-falling entity to hit the floor.
const TICKS_TO_CRASH: usize = 40;

fn idle(ticks: usize) -> Vec<Vec<GameInput>> {
    vec![Vec::new(); ticks]
}

#[test]
fn test_quit_on_first_tick() {
    let mut session = session();
    let mut input = ScriptedInput::new(vec![vec![GameInput::Quit]]);
    let mut display = RecordingPresenter::default();
    let mut clock = NoopClock::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let summary = run_loop(&mut session, &mut input, &mut display, &mut clock, &mut rng).unwrap();

    assert_eq!(summary.ticks, 0);
    assert_eq!(summary.games, 1);
    assert!(display.frames.is_empty());
    assert_eq!(clock.ticks, 0);
}

#[test]
fn test_one_frame_per_tick() {
    let mut session = session();
    let mut input = ScriptedInput::new(idle(10));
    let mut display = RecordingPresenter::default();
    let mut clock = NoopClock::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let summary = run_loop(&mut session, &mut input, &mut display, &mut clock, &mut rng).unwrap();

    assert_eq!(summary.ticks, 10);
    assert_eq!(display.frames.len(), 10);
    assert_eq!(display.images, 10);
    assert_eq!(clock.ticks, 10);
    assert!(display.frames.iter().all(|f| f == &vec!["Score: 0".to_string()]));
}

#[test]
fn test_crash_shows_game_over_until_restart() {
    let mut session = session();
    let mut script = idle(TICKS_TO_CRASH);
    // Jumping while dead does nothing.
    script.push(vec![GameInput::Jump]);
    script.push(vec![GameInput::Restart]);
    let mut input = ScriptedInput::new(script);
    let mut display = RecordingPresenter::default();
    let mut clock = NoopClock::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let summary = run_loop(&mut session, &mut input, &mut display, &mut clock, &mut rng).unwrap();

    let dead_frame = &display.frames[TICKS_TO_CRASH];
    assert!(dead_frame.iter().any(|t| t == "Game Over"));
    assert!(dead_frame.iter().any(|t| t == "Press R to Replay"));

    let after_restart = display.frames.last().unwrap();
    assert_eq!(after_restart, &vec!["Score: 0".to_string()]);
    assert_eq!(summary.games, 2);
    assert!(session.state.alive);
}

#[test]
fn test_many_restarts_in_one_loop() {
    let mut session = session();
    let mut script = Vec::new();
    for _ in 0..500 {
        script.extend(idle(TICKS_TO_CRASH));
        script.push(vec![GameInput::Restart]);
    }
    let mut input = ScriptedInput::new(script);
    let mut display = RecordingPresenter::default();
    let mut clock = NoopClock::default();
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let summary = run_loop(&mut session, &mut input, &mut display, &mut clock, &mut rng).unwrap();

    assert_eq!(summary.games, 501);
    assert_eq!(summary.ticks, 500 * (TICKS_TO_CRASH as u64 + 1));
}

#[test]
fn test_restart_ignored_while_alive() {
    let mut session = session();
    let mut script = idle(5);
    script.push(vec![GameInput::Restart]);
    let mut input = ScriptedInput::new(script);
    let mut display = RecordingPresenter::default();
    let mut clock = NoopClock::default();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let summary = run_loop(&mut session, &mut input, &mut display, &mut clock, &mut rng).unwrap();

    assert_eq!(summary.games, 1);
    assert_eq!(session.state.frame_count, 6);
}

#[test]
fn test_input_error_propagates() {
    let mut session = session();
    let mut display = RecordingPresenter::default();
    let mut clock = NoopClock::default();
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    let result = run_loop(&mut session, &mut FailingInput, &mut display, &mut clock, &mut rng);

    assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    assert!(display.frames.is_empty());
}
