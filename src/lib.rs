//! Test Drive - a small top-down collect-the-items game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (phases, movement, camera, collection)
//! - `input`: Per-frame keyboard/controller snapshots and edge detection
//! - `audio`: Audio service seam and volume mixing
//! - `render`: Immediate-mode renderer seam and frame composition
//! - `telemetry`: Fire-and-forget activity reporting
//! - `settings`: Data-driven game configuration
//! - `game`: Session controller wiring the lifecycle together
//! - `host`: Driver loop and the headless host

pub mod audio;
pub mod game;
pub mod host;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;
pub mod telemetry;

pub use game::{Flow, Game};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Nominal frame step used by the headless host (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta the driver will pass to `update`
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World dimensions
    pub const WORLD_SIZE: Vec2 = Vec2::new(3000.0, 3000.0);
    /// Visible area
    pub const VIEWPORT_SIZE: Vec2 = Vec2::new(800.0, 600.0);

    /// Player defaults
    pub const PLAYER_SIZE: Vec2 = Vec2::new(64.0, 64.0);
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(50.0, 50.0);
    /// Movement speed in world units per second
    pub const PLAYER_SPEED: f32 = 300.0;

    /// Collectable defaults
    pub const ITEM_SIZE: Vec2 = Vec2::new(32.0, 32.0);
    pub const ITEM_COUNT: usize = 5;
    pub const ITEM_VALUE_MIN: u32 = 10;
    pub const ITEM_VALUE_MAX: u32 = 100;
}
