//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame delta supplied by the caller
//! - Seeded RNG only
//! - Stable iteration order (by item ID)
//! - No rendering, audio or platform dependencies

pub mod camera;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use camera::{Camera, follow_offset};
pub use rect::Rect;
pub use spawn::generate_collectables;
pub use state::{Collectable, GameEvent, GamePhase, Player, SessionState, WorldConfig};
pub use tick::{TickInput, autopilot_direction, tick};
