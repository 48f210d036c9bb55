//! Parallax background scrolling
//!
//! Each layer is one world-width strip drawn twice, at `offset` and
//! `offset + width`, so the seam never shows.

use serde::{Deserialize, Serialize};

/// Named background strips, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Sky,
    Mountains,
    Hills,
    Ground,
}

/// A wrapping background strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundLayer {
    pub kind: LayerKind,
    /// Horizontal offset, always in `(-width, 0]`
    pub offset: f32,
    /// Leftward scroll per tick
    pub speed: f32,
    pub width: f32,
}

impl BackgroundLayer {
    pub fn new(kind: LayerKind, speed: f32, width: f32) -> Self {
        Self {
            kind,
            offset: 0.0,
            speed,
            width,
        }
    }

    /// Scroll one tick, wrapping back to the origin after a full strip
    pub fn advance(&mut self) {
        self.offset -= self.speed;
        if self.offset <= -self.width {
            self.offset = 0.0;
        }
    }

    /// X positions of the two tiles that cover the viewport
    pub fn draw_positions(&self) -> [f32; 2] {
        [self.offset, self.offset + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_layer_never_moves() {
        let mut sky = BackgroundLayer::new(LayerKind::Sky, 0.0, 640.0);
        for _ in 0..1000 {
            sky.advance();
        }
        assert_eq!(sky.offset, 0.0);
    }

    #[test]
    fn test_layer_wraps_to_origin() {
        let mut ground = BackgroundLayer::new(LayerKind::Ground, 4.0, 640.0);
        for _ in 0..159 {
            ground.advance();
        }
        assert_eq!(ground.offset, -636.0);
        ground.advance();
        assert_eq!(ground.offset, 0.0);
    }

    #[test]
    fn test_tiles_cover_viewport() {
        let mut hills = BackgroundLayer::new(LayerKind::Hills, 1.5, 640.0);
        for _ in 0..2000 {
            hills.advance();
            let [a, b] = hills.draw_positions();
            assert!(a <= 0.0);
            assert!(b + hills.width >= 640.0);
            assert_eq!(b - a, 640.0);
        }
    }
}
