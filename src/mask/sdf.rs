//! Distance functions for eraser shapes
//!
//! A brush dab is a disk, a dragged brush is a capsule (all points within the
//! brush radius of a segment). Both are tested per cell with these functions.

use glam::Vec2;

use crate::consts::DISTANCE_EPSILON;

/// Signed distance to a circle
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Squared distance from `p` to the closest point of segment `a`-`b`
///
/// Degenerate segments (`a == b`) reduce to point distance. Evaluated in
/// `f64`: the projection error in `f32` grows with segment length and would
/// misclassify cells on the edge of long strokes.
#[inline]
pub fn segment_distance_sq(p: Vec2, a: Vec2, b: Vec2) -> f64 {
    let (p, a, b) = (p.as_dvec2(), a.as_dvec2(), b.as_dvec2());
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.length_squared();
    let dot = ap.dot(ab);
    if len_sq == 0.0 || dot <= 0.0 {
        ap.length_squared()
    } else if dot >= len_sq {
        (p - b).length_squared()
    } else {
        // Perpendicular distance from the cross product avoids the rounding
        // of an explicit projection point
        let cross = ab.perp_dot(ap);
        cross * cross / len_sq
    }
}

/// Signed distance to a capsule of half-width `radius` around segment `a`-`b`
#[inline]
pub fn sd_capsule(p: Vec2, a: Vec2, b: Vec2, radius: f32) -> f32 {
    (segment_distance_sq(p, a, b).sqrt() - radius as f64) as f32
}

/// Inside-or-on test for a capsule
///
/// The tolerance is relative to `radius²`, so boundary cells of exactly
/// representable strokes stay inside at any length.
#[inline]
pub fn capsule_contains(p: Vec2, a: Vec2, b: Vec2, radius: f32) -> bool {
    let r_sq = radius as f64 * radius as f64;
    segment_distance_sq(p, a, b) <= r_sq * (1.0 + DISTANCE_EPSILON)
}
