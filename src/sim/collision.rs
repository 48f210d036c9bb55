//! Collision detection for axis-aligned boxes
//!
//! One primitive covers every interaction: player vs hazard, player vs
//! collectible, and the horizontal half of platform landing. Entity counts
//! are small and bounded, so pairs are tested directly with no broad phase.

use super::rect::{Rect, spans_overlap};

/// Check whether two rectangles overlap
///
/// Strict on all four edges: rectangles that only share an edge or a
/// corner do not collide.
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    spans_overlap(a.left(), a.right(), b.left(), b.right())
        && spans_overlap(a.top(), a.bottom(), b.top(), b.bottom())
}

/// Check whether a descending body crossed onto a platform's top surface
///
/// `prev_bottom` is the body's bottom edge before this tick's move and
/// `body` is its rectangle after the move. Lands when the body overlaps the
/// platform horizontally and its bottom went from at/above the top edge to
/// at/below it.
pub fn lands_on(prev_bottom: f32, body: &Rect, platform: &Rect) -> bool {
    spans_overlap(body.left(), body.right(), platform.left(), platform.right())
        && prev_bottom <= platform.top()
        && body.bottom() >= platform.top()
}

/// Check whether a body is resting on a platform's top surface
pub fn stands_on(body: &Rect, platform: &Rect) -> bool {
    spans_overlap(body.left(), body.right(), platform.left(), platform.right())
        && (body.bottom() - platform.top()).abs() <= f32::EPSILON * platform.top().abs().max(1.0)
}
