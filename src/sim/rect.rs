//! Axis-aligned rectangle geometry for sprites and world bounds
//!
//! A rectangle is defined by:
//! - min: top-left corner (y grows downward, as on screen)
//! - size: width and height, never negative

use glam::Vec2;

/// An axis-aligned bounding box in world or screen space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            size: size.max(Vec2::ZERO),
        }
    }

    /// Rectangle anchored at the origin
    pub fn from_size(size: Vec2) -> Self {
        Self::new(Vec2::ZERO, size)
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Check if a point lies inside (min edge inclusive, max edge exclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }

    /// Check if two rectangles overlap.
    ///
    /// Strict: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        other.min.x < a_max.x
            && self.min.x < b_max.x
            && other.min.y < a_max.y
            && self.min.y < b_max.y
    }

    /// Translate by an offset
    pub fn offset(&self, delta: Vec2) -> Rect {
        Rect::new(self.min + delta, self.size)
    }

    /// Largest top-left position that keeps a box of `inner` size inside `self`
    pub fn max_origin_for(&self, inner: Vec2) -> Vec2 {
        (self.max() - inner).max(self.min)
    }
}
