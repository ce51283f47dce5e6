//! The simulation loop.
//!
//! A [`Session`] owns everything one run of the program needs (tuning, the
//! sprite and the current [`GameState`]) and is passed explicitly into the
//! loop. Restarting replaces the state in place; the loop never re-enters
//! itself.

use crate::clock::Clock;
use crate::config::GameConfig;
use crate::game::{process_input, process_tick, GameInput, GameState, InputOutcome, TickEvent};
use crate::input::InputSource;
use crate::ui::{render_game, DisplayList, Presenter, Sprite};
use rand::Rng;
use std::io;

/// Totals reported when the loop exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    /// Ticks run, alive or dead.
    pub ticks: u64,
    /// Games started, including the first.
    pub games: u32,
    /// Highest score reached in any game.
    pub best_score: u32,
}

/// Loop context.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    pub sprite: Sprite,
    pub state: GameState,
    summary: LoopSummary,
}

impl Session {
    pub fn new(config: GameConfig, sprite: Sprite) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            sprite,
            state,
            summary: LoopSummary {
                games: 1,
                ..Default::default()
            },
        }
    }

    pub fn summary(&self) -> LoopSummary {
        self.summary
    }

    /// Apply this tick's inputs in arrival order. Stops at the first quit.
    pub fn handle_inputs(&mut self, inputs: &[GameInput]) -> InputOutcome {
        for &input in inputs {
            let was_alive = self.state.alive;
            if process_input(&mut self.state, input, &self.config) == InputOutcome::Quit {
                return InputOutcome::Quit;
            }
            if !was_alive && self.state.alive {
                self.summary.games += 1;
                log::info!("Restarting, game {}", self.summary.games);
            }
        }
        InputOutcome::Continue
    }

    /// Advance the simulation one tick and log what happened.
    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        self.summary.ticks += 1;
        for event in process_tick(&mut self.state, &self.config, rng) {
            match event {
                TickEvent::ObstacleSpawned { gap_top } => {
                    log::debug!(
                        "Spawned obstacle at tick {} with gap at {:.0}",
                        self.state.frame_count,
                        gap_top
                    );
                }
                TickEvent::Scored { score } => {
                    self.summary.best_score = self.summary.best_score.max(score);
                }
                TickEvent::Died { score } => {
                    log::info!(
                        "Crashed after {} ticks with score {}",
                        self.state.frame_count,
                        score
                    );
                }
            }
        }
    }

    /// Draw calls for the current state.
    pub fn frame(&self) -> DisplayList<'_> {
        let mut list = DisplayList::new(self.config.field_width, self.config.field_height);
        render_game(&mut list, &self.state, &self.sprite, &self.config);
        list
    }
}

/// Run until a quit input arrives.
///
/// Each tick: drain input, simulate (a no-op while dead), render, present,
/// then wait for the next frame boundary.
pub fn run_loop<I, P, C, R>(
    session: &mut Session,
    input: &mut I,
    display: &mut P,
    clock: &mut C,
    rng: &mut R,
) -> io::Result<LoopSummary>
where
    I: InputSource,
    P: Presenter,
    C: Clock,
    R: Rng,
{
    log::info!(
        "Starting loop at {} Hz on a {}x{} field",
        session.config.tick_rate,
        session.config.field_width,
        session.config.field_height
    );

    loop {
        let inputs = input.drain()?;
        if session.handle_inputs(&inputs) == InputOutcome::Quit {
            let summary = session.summary();
            log::info!(
                "Quit after {} ticks, {} games, best score {}",
                summary.ticks,
                summary.games,
                summary.best_score
            );
            return Ok(summary);
        }

        session.update(rng);
        display.present(&session.frame())?;
        clock.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn session() -> Session {
        let cfg = GameConfig::default();
        let sprite = Sprite::from_pixels(1, 1, vec![Some(Color::Yellow)], 80.0, 60.0);
        Session::new(cfg, sprite)
    }

    #[test]
    fn test_new_session_counts_first_game() {
        let s = session();
        assert_eq!(s.summary().games, 1);
        assert!(s.state.alive);
    }

    #[test]
    fn test_restart_counts_game() {
        let mut s = session();
        s.state.alive = false;
        s.state.score = 5;
        assert_eq!(
            s.handle_inputs(&[GameInput::Restart]),
            InputOutcome::Continue
        );
        assert_eq!(s.summary().games, 2);
        assert_eq!(s.state.score, 0);
    }

    #[test]
    fn test_quit_stops_processing_later_inputs() {
        let mut s = session();
        s.state.entity_velocity = 2.0;
        let outcome = s.handle_inputs(&[GameInput::Quit, GameInput::Jump]);
        assert_eq!(outcome, InputOutcome::Quit);
        assert_eq!(s.state.entity_velocity, 2.0);
    }

    #[test]
    fn test_restart_then_jump_in_one_tick() {
        let mut s = session();
        s.state.alive = false;
        s.handle_inputs(&[GameInput::Restart, GameInput::Jump]);
        assert!(s.state.alive);
        assert_eq!(s.state.entity_velocity, s.config.jump_impulse);
    }

    #[test]
    fn test_frame_reflects_state() {
        let mut s = session();
        s.state.score = 12;
        let frame = s.frame();
        assert!(frame.texts().any(|t| t == "Score: 12"));
    }
}
