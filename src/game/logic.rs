//! Game logic: input handling and the per-tick simulation step.

use super::types::GameState;
use crate::config::GameConfig;
use rand::Rng;

/// Input actions the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Upward impulse (Space, Up or `w`).
    Jump,
    /// Start a new session after a crash (`r`).
    Restart,
    /// Leave the game (Esc, `q` or Ctrl-C).
    Quit,
    /// Any other key.
    Other,
}

/// What the loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// A new pair entered at the right edge with an upper rectangle this tall.
    ObstacleSpawned { gap_top: f64 },
    /// A pair was passed; `score` is the new total.
    Scored { score: u32 },
    /// The entity collided. The state is now dead.
    Died { score: u32 },
}

/// Process one input event.
///
/// Jump only acts while alive and overrides the current velocity. Restart
/// only acts while dead and replaces the whole state.
pub fn process_input(game: &mut GameState, input: GameInput, cfg: &GameConfig) -> InputOutcome {
    match input {
        GameInput::Quit => return InputOutcome::Quit,
        GameInput::Jump => {
            if game.alive {
                game.entity_velocity = cfg.jump_impulse;
            }
        }
        GameInput::Restart => {
            if !game.alive {
                *game = GameState::new(cfg);
            }
        }
        GameInput::Other => {}
    }
    InputOutcome::Continue
}

/// Advance the simulation by one tick. Does nothing while dead.
///
/// Order: physics, spawn, scroll, score, cull, collision. Scoring runs
/// before culling so a pair that passes the entity and leaves the field in
/// the same tick is still counted.
pub fn process_tick<R: Rng>(game: &mut GameState, cfg: &GameConfig, rng: &mut R) -> Vec<TickEvent> {
    let mut events = Vec::new();
    if !game.alive {
        return events;
    }

    apply_physics(game, cfg);

    if game.frame_count % cfg.spawn_interval_ticks.max(1) == 0 {
        let gap_top = game.spawn_obstacle(cfg, rng);
        events.push(TickEvent::ObstacleSpawned { gap_top });
    }
    game.frame_count += 1;

    scroll_obstacles(game, cfg);

    let passed = update_score(game, cfg);
    if passed > 0 {
        events.push(TickEvent::Scored { score: game.score });
    }

    cull_obstacles(game);

    if check_collision(game, cfg) {
        game.alive = false;
        events.push(TickEvent::Died { score: game.score });
    }

    events
}

/// Semi-implicit Euler: velocity first, then position with the new velocity.
pub fn apply_physics(game: &mut GameState, cfg: &GameConfig) {
    game.entity_velocity += cfg.gravity;
    game.entity_y += game.entity_velocity;
}

/// Move every pair left by the scroll speed.
pub fn scroll_obstacles(game: &mut GameState, cfg: &GameConfig) {
    for pair in &mut game.obstacles {
        pair.scroll(cfg.scroll_speed);
    }
}

/// Score every unscored pair whose leading edge is past the entity.
/// Returns how many pairs were scored.
pub fn update_score(game: &mut GameState, cfg: &GameConfig) -> u32 {
    let mut passed = 0;
    for pair in &mut game.obstacles {
        if !pair.scored && pair.x() < cfg.entity_x {
            pair.scored = true;
            passed += 1;
        }
    }
    game.score += passed;
    passed
}

/// Drop pairs whose trailing edge is left of the field. A pair with any
/// visible column (right edge >= 0) is kept.
pub fn cull_obstacles(game: &mut GameState) {
    game.obstacles.retain(|pair| pair.right() >= 0.0);
}

/// True when the entity touches the field top or bottom, or overlaps any
/// obstacle rectangle.
pub fn check_collision(game: &GameState, cfg: &GameConfig) -> bool {
    let entity = game.entity_rect(cfg);
    if entity.top() <= 0.0 || entity.bottom() >= cfg.field_height {
        return true;
    }

    game.obstacles
        .iter()
        .flat_map(|pair| pair.rects())
        .any(|rect| entity.intersects(rect))
}
