//! Axis-aligned rectangle geometry for every entity
//!
//! World coordinates: origin top-left, x grows right, y grows down.
//! A rectangle is defined by:
//! - pos: top-left corner
//! - size: width and height (both > 0)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width (x) and height (y)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// True once the right edge has scrolled past the world's left boundary
    #[inline]
    pub fn is_past_left(&self) -> bool {
        self.right() < 0.0
    }

    /// Center point (for debugging and render hints)
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Strict open-interval intersection: touching endpoints do not count
#[inline]
pub fn spans_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_min < b_max && a_max > b_min
}
