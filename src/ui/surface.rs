//! Drawing primitives in field coordinates.
//!
//! The renderer talks to a [`Surface`]; [`DisplayList`] is the surface used
//! every frame. It records commands in order and is later painted onto the
//! terminal (or inspected by tests).

use super::sprite::Sprite;
use crate::game::Rect;
use ratatui::style::Color;

/// Where a text position sits relative to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Position is the first character's cell.
    TopLeft,
    /// Position is the middle of the line.
    Center,
}

/// Immediate-mode drawing target. `'a` bounds the sprites a frame may
/// reference.
pub trait Surface<'a> {
    /// Fill the whole field with `color`.
    fn clear(&mut self, color: Color);
    /// Fill `rect` with `color`.
    fn draw_rect(&mut self, rect: Rect, color: Color);
    /// Draw `sprite` with its top-left corner at (`x`, `y`).
    fn draw_image(&mut self, sprite: &'a Sprite, x: f64, y: f64);
    /// Draw a single line of text at (`x`, `y`).
    fn draw_text(&mut self, text: &str, color: Color, x: f64, y: f64, anchor: TextAnchor);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand<'a> {
    Clear(Color),
    Rect {
        rect: Rect,
        color: Color,
    },
    Image {
        sprite: &'a Sprite,
        x: f64,
        y: f64,
    },
    Text {
        text: String,
        color: Color,
        x: f64,
        y: f64,
        anchor: TextAnchor,
    },
}

/// Ordered draw calls for one frame of a field of the given size.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList<'a> {
    field_width: f64,
    field_height: f64,
    commands: Vec<DrawCommand<'a>>,
}

impl<'a> DisplayList<'a> {
    pub fn new(field_width: f64, field_height: f64) -> Self {
        Self {
            field_width,
            field_height,
            commands: Vec::new(),
        }
    }

    pub fn field_size(&self) -> (f64, f64) {
        (self.field_width, self.field_height)
    }

    pub fn commands(&self) -> &[DrawCommand<'a>] {
        &self.commands
    }

    /// All text drawn this frame, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl<'a> Surface<'a> for DisplayList<'a> {
    fn clear(&mut self, color: Color) {
        // Anything recorded before a clear would be painted over anyway.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_image(&mut self, sprite: &'a Sprite, x: f64, y: f64) {
        self.commands.push(DrawCommand::Image { sprite, x, y });
    }

    fn draw_text(&mut self, text: &str, color: Color, x: f64, y: f64, anchor: TextAnchor) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            color,
            x,
            y,
            anchor,
        });
    }
}
