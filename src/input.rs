//! Keyboard and controller input
//!
//! The host samples devices once per frame into an `InputSnapshot`.
//! `InputTracker` keeps the previous snapshot next to the current one so
//! edge-triggered presses can be derived without an event queue.

use std::collections::HashSet;

use glam::Vec2;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Enter,
    Escape,
}

/// Device state sampled at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Currently held keys
    pub keys_down: HashSet<Key>,
    /// Controller "back" button held
    pub gamepad_back: bool,
}

impl InputSnapshot {
    pub fn with_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys_down: keys.into_iter().collect(),
            gamepad_back: false,
        }
    }

    #[inline]
    pub fn is_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

/// Previous/current snapshot pair
#[derive(Debug, Default)]
pub struct InputTracker {
    previous: InputSnapshot,
    current: InputSnapshot,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift the current snapshot into history and store the new one
    pub fn advance(&mut self, snapshot: InputSnapshot) {
        self.previous = std::mem::replace(&mut self.current, snapshot);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.current.is_down(key)
    }

    /// Down now, up in the previous frame
    pub fn just_pressed(&self, key: Key) -> bool {
        self.current.is_down(key) && !self.previous.is_down(key)
    }

    /// Escape or controller back, held
    pub fn quit_requested(&self) -> bool {
        self.current.gamepad_back || self.current.is_down(Key::Escape)
    }

    /// Raw direction from arrow keys and WASD (not normalized, y down)
    pub fn movement(&self) -> Vec2 {
        let held = |a: Key, b: Key| self.is_down(a) || self.is_down(b);
        let mut dir = Vec2::ZERO;
        if held(Key::Left, Key::A) {
            dir.x -= 1.0;
        }
        if held(Key::Right, Key::D) {
            dir.x += 1.0;
        }
        if held(Key::Up, Key::W) {
            dir.y -= 1.0;
        }
        if held(Key::Down, Key::S) {
            dir.y += 1.0;
        }
        dir
    }

    /// Build the simulation input for this frame
    pub fn tick_input(&self, autopilot: bool) -> TickInput {
        TickInput {
            movement: self.movement(),
            confirm: self.just_pressed(Key::Enter),
            autopilot,
        }
    }
}
