//! Game settings and tuning
//!
//! Loaded from an optional JSON file; every missing field falls back to the
//! defaults in `consts`.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::audio::Mixer;
use crate::consts::*;
use crate::sim::WorldConfig;
use crate::telemetry::ActivityReport;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    pub world_size: Vec2,
    pub viewport_size: Vec2,

    // === Player ===
    pub player_size: Vec2,
    pub player_spawn: Vec2,
    /// World units per second
    pub player_speed: f32,

    // === Collectables ===
    pub item_size: Vec2,
    pub item_count: usize,
    pub item_value_min: u32,
    pub item_value_max: u32,

    // === Run ===
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
    /// Let the game steer itself (demo mode)
    pub autopilot: bool,
    /// Frame budget for the headless host
    pub max_frames: u64,

    // === Audio ===
    pub audio: Mixer,

    // === Telemetry ===
    pub activity: ActivityReport,
}

impl Default for Settings {
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

            seed: None,
            autopilot: false,
            max_frames: 60 * 60 * 5,

            audio: Mixer::default(),

            activity: ActivityReport::default(),
        }
    }
}

impl Settings {
    /// Read and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject configurations the game cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let sizes = [
            ("world_size", self.world_size),
            ("viewport_size", self.viewport_size),
            ("player_size", self.player_size),
            ("item_size", self.item_size),
        ];
        for (name, size) in sizes {
            if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
                return invalid(format!("{name} must be positive, got {size}"));
            }
        }
        if self.player_size.cmpgt(self.world_size).any() {
            return invalid("player does not fit in the world".to_string());
        }
        if self.item_size.cmpgt(self.world_size).any() {
            return invalid("item does not fit in the world".to_string());
        }
        if !self.player_spawn.is_finite() {
            return invalid("player_spawn must be finite".to_string());
        }
        if !self.player_speed.is_finite() || self.player_speed <= 0.0 {
            return invalid(format!(
                "player_speed must be positive, got {}",
                self.player_speed
            ));
        }
        if self.item_count == 0 {
            return invalid("item_count must be at least 1".to_string());
        }
        if self.item_value_min > self.item_value_max {
            return invalid(format!(
                "item value range [{}, {}] is empty",
                self.item_value_min, self.item_value_max
            ));
        }
        let volumes = [
            self.audio.master_volume,
            self.audio.music_volume,
            self.audio.sfx_volume,
        ];
        if volumes.iter().any(|v| !(0.0..=1.0).contains(v)) {
            return invalid("volumes must be within 0.0 - 1.0".to_string());
        }
        Ok(())
    }

    /// Dimensions and tuning handed to the simulation
    pub fn world_config(&self) -> WorldConfig {
        WorldConfig {
            world_size: self.world_size,
            viewport_size: self.viewport_size,
            player_size: self.player_size,
            player_spawn: self.player_spawn,
            player_speed: self.player_speed,
            item_size: self.item_size,
            item_count: self.item_count,
            item_value_min: self.item_value_min,
            item_value_max: self.item_value_max,
        }
    }

    /// Configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn invalid(reason: String) -> Result<(), SettingsError> {
    Err(SettingsError::Invalid(reason))
}
