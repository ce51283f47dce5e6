//! Flappy data structures.
//!
//! The whole session lives in one [`GameState`] record. Obstacles are named
//! pairs that carry their own `scored` flag, so scoring stays correct when
//! pairs ahead of them are culled and the vector is re-indexed.

use crate::config::GameConfig;
use rand::Rng;

/// Axis-aligned rectangle in field units. Origin is the top-left corner and
/// y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True when both the horizontal and vertical intervals overlap with
    /// nonzero measure. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// One obstacle: an upper and lower rectangle sharing x and width,
/// separated by the configured gap.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstaclePair {
    /// Spans from the field top down to the gap.
    pub upper: Rect,
    /// Spans from the bottom of the gap to the field bottom.
    pub lower: Rect,
    /// Set once the entity has passed this pair.
    pub scored: bool,
}

impl ObstaclePair {
    /// Build a pair at `x` whose upper rectangle is `gap_top` tall.
    pub fn new(x: f64, gap_top: f64, cfg: &GameConfig) -> Self {
        let lower_top = gap_top + cfg.gap_height;
        Self {
            upper: Rect::new(x, 0.0, cfg.obstacle_width, gap_top),
            lower: Rect::new(
                x,
                lower_top,
                cfg.obstacle_width,
                cfg.field_height - lower_top,
            ),
            scored: false,
        }
    }

    /// Leading (left) edge.
    pub fn x(&self) -> f64 {
        self.upper.x
    }

    /// Trailing (right) edge.
    pub fn right(&self) -> f64 {
        self.upper.right()
    }

    /// Height of the opening between the two rectangles.
    pub fn gap(&self) -> f64 {
        self.lower.top() - self.upper.bottom()
    }

    /// Move both rectangles left by `dx`.
    pub fn scroll(&mut self, dx: f64) {
        self.upper.x -= dx;
        self.lower.x -= dx;
    }

    pub fn rects(&self) -> [&Rect; 2] {
        [&self.upper, &self.lower]
    }
}

/// Main game state. Replaced wholesale on restart.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Vertical center of the entity.
    pub entity_y: f64,
    /// Vertical velocity per tick (negative = upward).
    pub entity_velocity: f64,
    /// Spawn order, which is also left-to-right order.
    pub obstacles: Vec<ObstaclePair>,
    /// Pairs passed this session.
    pub score: u32,
    /// Alive ticks elapsed. Only used to time spawns.
    pub frame_count: u64,
    /// False once the entity has collided; the simulation is frozen until restart.
    pub alive: bool,
}

impl GameState {
    /// Fresh session: entity at the vertical midpoint, at rest, no obstacles.
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            entity_y: cfg.field_height / 2.0,
            entity_velocity: 0.0,
            obstacles: Vec::new(),
            score: 0,
            frame_count: 0,
            alive: true,
        }
    }

    /// The entity's bounding box, centered on (`entity_x`, `entity_y`).
    pub fn entity_rect(&self, cfg: &GameConfig) -> Rect {
        Rect::new(
            cfg.entity_x - cfg.entity_width / 2.0,
            self.entity_y - cfg.entity_height / 2.0,
            cfg.entity_width,
            cfg.entity_height,
        )
    }

    /// Append a pair at the right edge of the field with a random gap.
    ///
    /// The upper height is uniform over the configured margin range, so both
    /// rectangles keep at least `gap_margin` of height. Returns the chosen
    /// upper height.
    pub fn spawn_obstacle<R: Rng>(&mut self, cfg: &GameConfig, rng: &mut R) -> f64 {
        let (min, max) = cfg.gap_top_range();
        let gap_top = if max > min {
            rng.gen_range(min..=max)
        } else {
            min
        };
        self.obstacles
            .push(ObstaclePair::new(cfg.field_width, gap_top, cfg));
        gap_top
    }
}
