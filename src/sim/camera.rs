//! Camera follow for the scrolling world
//!
//! The camera is a pure view transform: its offset is recomputed from the
//! player's position every frame and never smoothed.

use glam::Vec2;

use super::rect::Rect;

/// Translation applied to world-space coordinates to get screen-space ones
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    /// Top-left corner of the visible area, in world units
    pub offset: Vec2,
}

impl Camera {
    /// Snap back to the world origin
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }

    /// Center on `target`, clamped so the view never leaves the world
    pub fn follow(&mut self, target: Vec2, world: Vec2, viewport: Vec2) {
        self.offset = follow_offset(target, world, viewport);
    }

    #[inline]
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos - self.offset
    }

    #[inline]
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        screen_pos + self.offset
    }

    /// World-space rectangle currently on screen
    pub fn visible_rect(&self, viewport: Vec2) -> Rect {
        Rect::new(self.offset, viewport)
    }
}

/// Camera offset that centers `target` in the viewport.
///
/// Each axis is clamped to `[0, world - viewport]`, or pinned to 0 when the
/// world is not larger than the viewport on that axis.
pub fn follow_offset(target: Vec2, world: Vec2, viewport: Vec2) -> Vec2 {
    let desired = target - viewport * 0.5;
    let limit = (world - viewport).max(Vec2::ZERO);
    desired.clamp(Vec2::ZERO, limit)
}
