//! Flappy - terminal arcade game library
//!
//! Exposes the simulation, rendering and loop so they can be tested without
//! a terminal.

pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod session;
pub mod ui;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{GameInput, GameState, InputOutcome, ObstaclePair, Rect, TickEvent};
pub use session::{run_loop, LoopSummary, Session};
