//! Overlap predicates for axis-aligned arcade geometry
//!
//! Two primitives cover every interaction in the game: circle/circle for
//! coin pickup and enemy contact, and Minkowski-padded rect/rect for
//! obstacle collision and placement validity (a point is a zero-size rect).

use glam::Vec2;

/// True iff two circles overlap (strict: touching circles do not count).
#[inline]
pub fn circles_overlap(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    c1.distance(c2) < r1 + r2
}

/// True iff a `w`×`h` rectangle centered at `center` overlaps a `pw`×`ph`
/// rectangle centered at `point`.
///
/// Implemented as a point-in-padded-rect test: the first rectangle is grown
/// by half the second's extent on each side (Minkowski sum), then `point`
/// is tested against the padded bounds with strict inequalities.
#[inline]
pub fn rect_overlap(center: Vec2, w: f32, h: f32, point: Vec2, pw: f32, ph: f32) -> bool {
    point.x > center.x - w / 2.0 - pw / 2.0
        && point.x < center.x + w / 2.0 + pw / 2.0
        && point.y > center.y - h / 2.0 - ph / 2.0
        && point.y < center.y + h / 2.0 + ph / 2.0
}
