//! Frame rendering for the game. Reads the state, never mutates it.

use super::sprite::Sprite;
use super::surface::{Surface, TextAnchor};
use crate::config::GameConfig;
use crate::game::GameState;
use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(255, 255, 255);
pub const OBSTACLE: Color = Color::Rgb(0, 200, 0);
pub const SCORE_TEXT: Color = Color::Rgb(0, 0, 0);
pub const GAME_OVER_TEXT: Color = Color::Rgb(255, 0, 0);

/// Score label offset from the field's top-left corner.
const SCORE_POS: (f64, f64) = (10.0, 10.0);
/// Vertical offset of the "Game Over" line above the field center.
const GAME_OVER_OFFSET: f64 = 50.0;

/// Draw one frame: background, entity, obstacles, score and, when dead,
/// the game-over overlay.
pub fn render_game<'a, S: Surface<'a>>(
    surface: &mut S,
    game: &GameState,
    sprite: &'a Sprite,
    cfg: &GameConfig,
) {
    surface.clear(BACKGROUND);

    let entity = game.entity_rect(cfg);
    surface.draw_image(sprite, entity.x, entity.y);

    for pair in &game.obstacles {
        for rect in pair.rects() {
            surface.draw_rect(*rect, OBSTACLE);
        }
    }

    surface.draw_text(
        &format!("Score: {}", game.score),
        SCORE_TEXT,
        SCORE_POS.0,
        SCORE_POS.1,
        TextAnchor::TopLeft,
    );

    if !game.alive {
        render_game_over(surface, cfg);
    }
}

fn render_game_over<'a, S: Surface<'a>>(surface: &mut S, cfg: &GameConfig) {
    let center_x = cfg.field_width / 2.0;
    let center_y = cfg.field_height / 2.0;

    surface.draw_text(
        "Game Over",
        GAME_OVER_TEXT,
        center_x,
        center_y - GAME_OVER_OFFSET,
        TextAnchor::Center,
    );
    surface.draw_text(
        "Press R to Replay",
        SCORE_TEXT,
        center_x,
        center_y,
        TextAnchor::Center,
    );
}
