//! Plane geometry helpers for the enclosure
//!
//! Everything here works in screen space: x grows to the right, y grows down.

use glam::Vec2;

/// Number of vertices (and edges) of the enclosure
pub const HEXAGON_SIDES: usize = 6;

/// Euclidean distance between two points
#[inline]
pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
    ((p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2)).sqrt()
}

/// Closest point to `p` on the segment `a`-`b`
///
/// Projects `p` onto the line through `a` and `b`, then clamps the projection
/// parameter to `[0, 1]` so the result never leaves the segment.
///
/// The segment must have positive length. A zero-length segment divides by
/// zero and yields NaN; callers reusing this outside the hexagon must guard
/// against `a == b` themselves.
pub fn closest_point_on_segment(a: Vec2, b: Vec2, p: Vec2) -> Vec2 {
    let ap = p - a;
    let ab = b - a;
    let t = (ap.dot(ab) / ab.length_squared()).clamp(0.0, 1.0);
    a + ab * t
}

/// Vertices of a regular hexagon around `center`
///
/// Vertex `i` sits at `60° * i` using the mathematical angle convention,
/// applied as-is to y-down screen coordinates. Successive vertices therefore
/// run clockwise on screen, which the collision normals rely on.
pub fn hexagon_vertices(center: Vec2, side_length: f32) -> [Vec2; HEXAGON_SIDES] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f32).to_radians();
        Vec2::new(
            center.x + side_length * angle.cos(),
            center.y + side_length * angle.sin(),
        )
    })
}
