//! Pure geometric helpers for hit-testing
//!
//! No state, no side effects. Works on `egui::Pos2` so the hit-test engine
//! and the renderer share coordinate types.

use egui::Pos2;

/// Distance from a point to the segment `a`..`b`.
///
/// Projects the point onto the infinite line through the endpoints, clamps
/// the projection parameter to `[0, 1]` to stay on the segment, and returns
/// the distance to the clamped projection. A zero-length segment falls back
/// to the point-to-point distance.
pub fn point_segment_distance(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Whether a point lies strictly inside a circle
pub fn point_in_circle(p: Pos2, center: Pos2, radius: f32) -> bool {
    p.distance(center) < radius
}
