//! Session state and core simulation types
//!
//! Everything the controller mutates per frame lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::camera::Camera;
use super::rect::Rect;
use super::spawn::generate_collectables;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    #[default]
    Opening,
    /// Exploring the world and collecting items
    Playing,
    /// Every item collected
    Success,
}

/// Dimensions and tuning for one session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    pub world_size: Vec2,
    pub viewport_size: Vec2,
    pub player_size: Vec2,
    pub player_spawn: Vec2,
    /// World units per second
    pub player_speed: f32,
    pub item_size: Vec2,
    pub item_count: usize,
    /// Closed range of item values
    pub item_value_min: u32,
    pub item_value_max: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_size: WORLD_SIZE,
            viewport_size: VIEWPORT_SIZE,
            player_size: PLAYER_SIZE,
            player_spawn: PLAYER_SPAWN,
            player_speed: PLAYER_SPEED,
            item_size: ITEM_SIZE,
            item_count: ITEM_COUNT,
            item_value_min: ITEM_VALUE_MIN,
            item_value_max: ITEM_VALUE_MAX,
        }
    }
}

impl WorldConfig {
    pub fn world_rect(&self) -> Rect {
        Rect::from_size(self.world_size)
    }

    /// Clamp a player top-left position so the whole sprite stays in the world
    pub fn clamp_player(&self, pos: Vec2) -> Vec2 {
        let max = self.world_rect().max_origin_for(self.player_size);
        pos.clamp(Vec2::ZERO, max)
    }
}

/// A reward item placed in the world
#[derive(Debug, Clone, PartialEq)]
pub struct Collectable {
    pub id: u32,
    /// Top-left corner in world space
    pub pos: Vec2,
    pub value: u32,
    pub collected: bool,
}

impl Collectable {
    pub fn bounds(&self, size: Vec2) -> Rect {
        Rect::new(self.pos, size)
    }

    /// Flag as collected. Returns the value on the first call, `None` after.
    pub fn collect(&mut self) -> Option<u32> {
        if self.collected {
            return None;
        }
        self.collected = true;
        Some(self.value)
    }
}

/// The player-controlled sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner in world space
    pub pos: Vec2,
    pub score: u64,
}

impl Player {
    pub fn spawn(at: Vec2) -> Self {
        Self { pos: at, score: 0 }
    }

    pub fn bounds(&self, size: Vec2) -> Rect {
        Rect::new(self.pos, size)
    }

    pub fn center(&self, size: Vec2) -> Vec2 {
        self.pos + size * 0.5
    }
}

/// Things that happened during a tick, consumed by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Opening -> Playing, with a fresh item set
    SessionStarted,
    /// An item was picked up
    ItemCollected { id: u32, value: u32 },
    /// Last item collected; fires once per session
    SessionCompleted { score: u64 },
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub config: WorldConfig,
    pub phase: GamePhase,
    pub items: Vec<Collectable>,
    pub player: Player,
    pub camera: Camera,
    /// Completion sound already triggered this session
    pub end_sound_played: bool,
    /// Frames ticked since creation
    pub frame: u64,
    /// Number of Opening -> Playing transitions so far
    pub sessions_started: u32,
    /// Events emitted since the last drain
    pub events: Vec<GameEvent>,
}

impl SessionState {
    /// Create a new state on the Opening screen
    pub fn new(seed: u64, config: WorldConfig) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            phase: GamePhase::Opening,
            items: Vec::new(),
            player: Player::spawn(config.player_spawn),
            camera: Camera::default(),
            end_sound_played: false,
            frame: 0,
            sessions_started: 0,
            events: Vec::new(),
        }
    }

    /// Enter Playing with everything per-session reset.
    ///
    /// This is the only place session flags are cleared.
    pub fn begin_session(&mut self) {
        self.items = generate_collectables(&mut self.rng, &self.config);
        self.player = Player::spawn(self.config.clamp_player(self.config.player_spawn));
        self.camera.reset();
        self.end_sound_played = false;
        self.sessions_started += 1;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::SessionStarted);
        log::info!(
            "Session {} started with {} items (seed {})",
            self.sessions_started,
            self.items.len(),
            self.seed
        );
    }

    /// Adopt the size of the surface the host draws into.
    ///
    /// The camera picks it up on the next Playing tick.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        if viewport != self.config.viewport_size {
            log::debug!(
                "Viewport {} -> {}",
                self.config.viewport_size,
                viewport
            );
            self.config.viewport_size = viewport;
        }
    }

    /// Items not yet collected
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|i| !i.collected).count()
    }

    pub fn all_collected(&self) -> bool {
        self.items.iter().all(|i| i.collected)
    }

    /// Sum of values of every collected item
    pub fn collected_total(&self) -> u64 {
        self.items
            .iter()
            .filter(|i| i.collected)
            .map(|i| u64::from(i.value))
            .sum()
    }

    /// Take the pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
