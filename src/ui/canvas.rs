//! Half-block pixel canvas.
//!
//! Each terminal cell holds two vertical pixels: `▀` with the upper pixel as
//! foreground and the lower pixel as background. That makes pixels roughly
//! square, so the field keeps its aspect ratio. Text is overlaid on whole
//! cells after the pixels are painted.

use super::sprite::Sprite;
use super::surface::{DisplayList, DrawCommand, TextAnchor};
use crate::game::Rect as FieldRect;
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// Smallest canvas (in pixels) that still reads as a game.
pub const MIN_PIXEL_WIDTH: u16 = 20;
pub const MIN_PIXEL_HEIGHT: u16 = 30;

const HALF_BLOCK: &str = "▀";

#[derive(Debug, Clone)]
struct Label {
    col: i32,
    row: i32,
    text: String,
    color: Color,
}

/// Field rasterized at a fixed pixels-per-unit scale.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    scale: f64,
    pixels: Vec<Color>,
    labels: Vec<Label>,
}

impl Canvas {
    /// Largest canvas for a field of `field_w` x `field_h` that fits in
    /// `cols` x `rows` cells. `None` when the result would be too small.
    pub fn fit(cols: u16, rows: u16, field_w: f64, field_h: f64) -> Option<Self> {
        if field_w <= 0.0 || field_h <= 0.0 {
            return None;
        }
        let scale = (cols as f64 / field_w).min(rows as f64 * 2.0 / field_h);
        let width = (field_w * scale).floor() as u16;
        let height = (field_h * scale).floor() as u16;

        if width < MIN_PIXEL_WIDTH || height < MIN_PIXEL_HEIGHT {
            return None;
        }

        Some(Self {
            width,
            height,
            scale,
            pixels: vec![Color::Reset; width as usize * height as usize],
            labels: Vec::new(),
        })
    }

    /// Fit and rasterize a whole display list.
    pub fn from_display_list(list: &DisplayList, cols: u16, rows: u16) -> Option<Self> {
        let (field_w, field_h) = list.field_size();
        let mut canvas = Self::fit(cols, rows, field_w, field_h)?;
        for cmd in list.commands() {
            canvas.apply(cmd);
        }
        Some(canvas)
    }

    /// Size in pixels.
    pub fn pixel_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Size in terminal cells.
    pub fn cell_size(&self) -> (u16, u16) {
        (self.width, self.height.div_ceil(2))
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    fn apply(&mut self, cmd: &DrawCommand) {
        match cmd {
            DrawCommand::Clear(color) => {
                self.pixels.fill(*color);
                self.labels.clear();
            }
            DrawCommand::Rect { rect, color } => self.fill_rect(rect, *color),
            DrawCommand::Image { sprite, x, y } => self.blit(sprite, *x, *y),
            DrawCommand::Text {
                text,
                color,
                x,
                y,
                anchor,
            } => self.label(text, *color, *x, *y, *anchor),
        }
    }

    /// Field-unit span to clamped pixel span.
    fn span(&self, start: f64, end: f64, limit: u16) -> (u16, u16) {
        let to_px = |v: f64| (v * self.scale).round().clamp(0.0, limit as f64) as u16;
        (to_px(start), to_px(end))
    }

    fn fill_rect(&mut self, rect: &FieldRect, color: Color) {
        let (x0, x1) = self.span(rect.left(), rect.right(), self.width);
        let (y0, y1) = self.span(rect.top(), rect.bottom(), self.height);
        for y in y0..y1 {
            let row = y as usize * self.width as usize;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    fn blit(&mut self, sprite: &Sprite, x: f64, y: f64) {
        let dest_x = x * self.scale;
        let dest_y = y * self.scale;
        let dest_w = sprite.display_width() * self.scale;
        let dest_h = sprite.display_height() * self.scale;
        if dest_w <= 0.0 || dest_h <= 0.0 {
            return;
        }

        let (x0, x1) = self.span(x, x + sprite.display_width(), self.width);
        let (y0, y1) = self.span(y, y + sprite.display_height(), self.height);
        for py in y0..y1 {
            let v = (py as f64 + 0.5 - dest_y) / dest_h;
            for px in x0..x1 {
                let u = (px as f64 + 0.5 - dest_x) / dest_w;
                if let Some(color) = sprite.sample(u, v) {
                    self.pixels[py as usize * self.width as usize + px as usize] = color;
                }
            }
        }
    }

    fn label(&mut self, text: &str, color: Color, x: f64, y: f64, anchor: TextAnchor) {
        let px = x * self.scale;
        let cell_row = (y * self.scale / 2.0).floor() as i32;
        let col = match anchor {
            TextAnchor::TopLeft => px.floor() as i32,
            TextAnchor::Center => px.round() as i32 - text.chars().count() as i32 / 2,
        };
        self.labels.push(Label {
            col,
            row: cell_row,
            text: text.to_string(),
            color,
        });
    }

    /// Write the canvas into `buf` with its top-left cell at `area`'s origin.
    /// Cells outside `area` are left untouched.
    pub fn paint(&self, buf: &mut Buffer, area: Rect) {
        let (cols, rows) = self.cell_size();
        let cols = cols.min(area.width);
        let rows = rows.min(area.height);

        for row in 0..rows {
            for col in 0..cols {
                let upper = self.pixel(col, row * 2).unwrap_or(Color::Reset);
                let lower = self.pixel(col, row * 2 + 1).unwrap_or(upper);
                buf.get_mut(area.x + col, area.y + row)
                    .set_symbol(HALF_BLOCK)
                    .set_fg(upper)
                    .set_bg(lower);
            }
        }

        for label in &self.labels {
            if label.row < 0 || label.row >= rows as i32 {
                continue;
            }
            let row = label.row as u16;
            for (i, ch) in label.text.chars().enumerate() {
                let col = label.col + i as i32;
                if col < 0 || col >= cols as i32 {
                    continue;
                }
                let col = col as u16;
                let bg = self.pixel(col, row * 2 + 1).unwrap_or(Color::Reset);
                buf.get_mut(area.x + col, area.y + row)
                    .set_char(ch)
                    .set_fg(label.color)
                    .set_bg(bg);
            }
        }
    }
}
