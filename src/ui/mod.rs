pub mod canvas;
pub mod game_scene;
pub mod sprite;
pub mod surface;
pub mod terminal;

pub use game_scene::render_game;
pub use sprite::Sprite;
pub use surface::{DisplayList, DrawCommand, Surface, TextAnchor};
pub use terminal::{Presenter, TerminalDisplay};
