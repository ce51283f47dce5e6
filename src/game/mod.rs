//! Flappy simulation.
//!
//! A real-time game where the player keeps an entity aloft through a stream
//! of scrolling gap obstacles by pressing a key to jump. Gravity pulls the
//! entity down each tick; touching the field edge or an obstacle ends the run
//! until the player restarts.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
