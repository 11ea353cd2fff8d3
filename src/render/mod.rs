//! Frame composition
//!
//! The host supplies an immediate-mode `Renderer`; this module decides what
//! goes on screen for each phase. Nothing here mutates game state.

pub mod draw_list;

use glam::Vec2;

use crate::sim::{GamePhase, Rect, SessionState};

pub use draw_list::{DrawCmd, DrawList};

/// RGBA color
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const CORNFLOWER_BLUE: Color = [0.392, 0.584, 0.929, 1.0];
    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
    pub const GOLD: Color = [1.0, 0.843, 0.0, 1.0];
}

/// Texture handles resolved by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    OpeningScreen,
    WorldBackground,
    Player,
    Collectable,
}

impl Texture {
    pub fn asset_name(&self) -> &'static str {
        match self {
            Texture::OpeningScreen => "Assets/Opening Screen",
            Texture::WorldBackground => "Assets/World Background",
            Texture::Player => "Assets/Player",
            Texture::Collectable => "Assets/Collectable",
        }
    }
}

/// Font handles resolved by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Large prompt and final score
    Message,
    /// Item values and running score
    Hud,
}

impl Font {
    pub fn asset_name(&self) -> &'static str {
        match self {
            Font::Message => "Assets/Message",
            Font::Hud => "Assets/Hud",
        }
    }
}

/// Immediate-mode sprite renderer provided by the host
pub trait Renderer {
    /// Size of the visible area in pixels
    fn viewport(&self) -> Vec2;
    fn clear(&mut self, color: Color);
    /// Rendered extent of `text`
    fn measure_text(&self, font: Font, text: &str) -> Vec2;
    fn draw_texture(&mut self, texture: Texture, dest: Rect, tint: Color);
    fn draw_text(&mut self, font: Font, text: &str, pos: Vec2, color: Color);
}

pub const OPENING_PROMPT: &str = "Press Enter to Start";
/// Distance of HUD text from the screen edge
const HUD_MARGIN: f32 = 10.0;
/// Gap between an item and its value label
const LABEL_GAP: f32 = 4.0;

/// Draw one frame for the current phase
pub fn draw_frame<R: Renderer>(state: &SessionState, renderer: &mut R) {
    renderer.clear(colors::CORNFLOWER_BLUE);

    match state.phase {
        GamePhase::Opening => draw_opening(renderer),
        GamePhase::Playing => draw_world(state, renderer),
        GamePhase::Success => {
            draw_world(state, renderer);
            let text = format!("Final Score: {}", state.player.score);
            draw_centered(renderer, Font::Message, &text, colors::GOLD);
        }
    }
}

fn draw_opening<R: Renderer>(renderer: &mut R) {
    let viewport = renderer.viewport();
    renderer.draw_texture(Texture::OpeningScreen, Rect::from_size(viewport), colors::WHITE);
    draw_centered(renderer, Font::Message, OPENING_PROMPT, colors::BLACK);
}

fn draw_world<R: Renderer>(state: &SessionState, renderer: &mut R) {
    let config = &state.config;
    let camera = &state.camera;
    let visible = camera.visible_rect(renderer.viewport());

    renderer.draw_texture(
        Texture::WorldBackground,
        config.world_rect().offset(-camera.offset),
        colors::WHITE,
    );

    for item in state.items.iter().filter(|i| !i.collected) {
        let bounds = item.bounds(config.item_size);
        if !visible.intersects(&bounds) {
            continue;
        }
        let screen = bounds.offset(-camera.offset);
        renderer.draw_texture(Texture::Collectable, screen, colors::WHITE);

        let label = item.value.to_string();
        let size = renderer.measure_text(Font::Hud, &label);
        let pos = Vec2::new(
            screen.center().x - size.x / 2.0,
            screen.min.y - size.y - LABEL_GAP,
        );
        renderer.draw_text(Font::Hud, &label, pos, colors::WHITE);
    }

    let player = state.player.bounds(config.player_size).offset(-camera.offset);
    renderer.draw_texture(Texture::Player, player, colors::WHITE);

    let score = format!("Score: {}", state.player.score);
    let size = renderer.measure_text(Font::Hud, &score);
    let pos = Vec2::new(renderer.viewport().x - size.x - HUD_MARGIN, HUD_MARGIN);
    renderer.draw_text(Font::Hud, &score, pos, colors::WHITE);
}

fn draw_centered<R: Renderer>(renderer: &mut R, font: Font, text: &str, color: Color) {
    let size = renderer.measure_text(font, text);
    let pos = (renderer.viewport() - size) / 2.0;
    renderer.draw_text(font, text, pos, color);
}
