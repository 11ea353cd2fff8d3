use glam::Vec2;

use super::{Color, Font, Renderer, Texture};
use crate::sim::Rect;

/// Renderer-agnostic draw command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Texture {
        texture: Texture,
        dest: Rect,
        tint: Color,
    },
    Text {
        font: Font,
        text: String,
        pos: Vec2,
        color: Color,
    },
}

/// Recorded draw stream for a frame.
///
/// Text is measured with a fixed per-glyph advance, which is enough for
/// layout when no real font is loaded (headless runs and tests).
#[derive(Debug)]
pub struct DrawList {
    viewport: Vec2,
    clear_color: Option<Color>,
    commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            clear_color: None,
            commands: Vec::new(),
        }
    }

    /// Commands in submission order
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Color of the last `clear`, if any
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// (advance, line height) in pixels
    fn glyph_metrics(font: Font) -> Vec2 {
        match font {
            Font::Message => Vec2::new(18.0, 36.0),
            Font::Hud => Vec2::new(10.0, 18.0),
        }
    }
}

impl Renderer for DrawList {
    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Starts a new frame: previous commands are dropped
    fn clear(&mut self, color: Color) {
        self.clear_color = Some(color);
        self.commands.clear();
    }

    fn measure_text(&self, font: Font, text: &str) -> Vec2 {
        let glyph = Self::glyph_metrics(font);
        Vec2::new(glyph.x * text.chars().count() as f32, glyph.y)
    }

    fn draw_texture(&mut self, texture: Texture, dest: Rect, tint: Color) {
        self.commands.push(DrawCmd::Texture {
            texture,
            dest,
            tint,
        });
    }

    fn draw_text(&mut self, font: Font, text: &str, pos: Vec2, color: Color) {
        self.commands.push(DrawCmd::Text {
            font,
            text: text.to_string(),
            pos,
            color,
        });
    }
}
