//! Game tuning.
//!
//! All distances are field units (the reference game's pixels), all rates are
//! per tick. The values are fixed at startup and shared by reference.

use std::time::Duration;

/// Path of the entity sprite, relative to the working directory.
pub const BIRD_SPRITE_PATH: &str = "assets/bird.png";

/// Pixel grid the sprite is resampled to once at load time.
pub const SPRITE_PIXELS: (u32, u32) = (20, 15);

/// Constants for one game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Field width.
    pub field_width: f64,
    /// Field height. The entity dies when it touches 0 or this value.
    pub field_height: f64,

    /// Fixed horizontal center of the entity.
    pub entity_x: f64,
    /// Entity bounding box width.
    pub entity_width: f64,
    /// Entity bounding box height.
    pub entity_height: f64,

    /// Velocity added every tick (positive = downward).
    pub gravity: f64,
    /// Velocity set by a jump, replacing the current one.
    pub jump_impulse: f64,

    /// Obstacle width.
    pub obstacle_width: f64,
    /// Vertical opening between the upper and lower rectangle.
    pub gap_height: f64,
    /// Leftward scroll per tick.
    pub scroll_speed: f64,
    /// A pair spawns on every alive tick that is a multiple of this.
    pub spawn_interval_ticks: u64,
    /// Minimum height of both the upper and lower rectangle.
    pub gap_margin: f64,

    /// Target frame rate of the loop.
    pub tick_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 400.0,
            field_height: 600.0,

            entity_x: 50.0,
            entity_width: 80.0,
            entity_height: 60.0,

            gravity: 0.5,
            jump_impulse: -8.0,

            obstacle_width: 70.0,
            gap_height: 150.0,
            scroll_speed: 3.0,
            spawn_interval_ticks: 90,
            gap_margin: 50.0,

            tick_rate: 60,
        }
    }
}

impl GameConfig {
    /// Duration of one tick at the configured rate.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }

    /// Range the upper rectangle's height is drawn from.
    ///
    /// Collapses to the lower bound when the field is too short for the
    /// margins, so spawning never panics on a degenerate config.
    pub fn gap_top_range(&self) -> (f64, f64) {
        let min = self.gap_margin;
        let max = (self.field_height - self.gap_height - self.gap_margin).max(min);
        (min, max)
    }
}
