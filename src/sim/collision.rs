//! Ball-versus-polygon collision response
//!
//! Edges are handled one at a time in vertex order. Each edge that the ball
//! touches is resolved on the spot, so the next edge sees the ball's already
//! corrected position and velocity. Near a corner the final state therefore
//! depends on which edge comes first.

use glam::Vec2;

use super::ball::Ball;
use super::geometry::{closest_point_on_segment, distance};
use crate::consts::DAMPING;

/// Contact between the ball and one polygon edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeContact {
    /// Index of the edge's first vertex
    pub edge: usize,
    /// Closest point on the edge to the ball center
    pub point: Vec2,
    /// Ball center to `point`
    pub distance: f32,
    /// Edge direction rotated by -90°, unit length
    pub normal: Vec2,
}

impl EdgeContact {
    /// How far the ball reaches past the edge
    #[inline]
    pub fn overlap(&self, radius: f32) -> f32 {
        radius - self.distance
    }
}

/// Unit normal of the edge `a`-`b`: `(-(b.y - a.y), b.x - a.x)` normalized
///
/// For the clockwise-on-screen hexagon this points into the enclosure.
#[inline]
pub fn edge_normal(a: Vec2, b: Vec2) -> Vec2 {
    let edge = b - a;
    Vec2::new(-edge.y, edge.x).normalize()
}

/// Check whether the ball touches the edge `a`-`b`
///
/// Touching includes the ball's rim sitting exactly on the edge.
pub fn edge_contact(ball: &Ball, edge: usize, a: Vec2, b: Vec2) -> Option<EdgeContact> {
    let point = closest_point_on_segment(a, b, ball.pos);
    let dist = distance(ball.pos, point);
    if dist > ball.radius {
        return None;
    }
    Some(EdgeContact {
        edge,
        point,
        distance: dist,
        normal: edge_normal(a, b),
    })
}

/// Reflect `velocity` about `normal`, scaling the reflection term by `damping`
///
/// `v' = v - 2 (v·n) n * damping`. There is no check on the sign of `v·n`,
/// so a ball already moving away from the edge is reflected too.
#[inline]
pub fn reflect_damped(velocity: Vec2, normal: Vec2, damping: f32) -> Vec2 {
    let d = velocity.dot(normal);
    velocity - 2.0 * d * normal * damping
}

/// Apply the bounce for one contact: reflect, then push the ball out along
/// the normal by the overlap measured before the reflection.
pub fn apply_contact(ball: &mut Ball, contact: &EdgeContact) {
    ball.vel = reflect_damped(ball.vel, contact.normal, DAMPING);
    ball.pos += contact.normal * contact.overlap(ball.radius);
}

/// Resolve the ball against every edge of the closed polygon `vertices`
///
/// Edge `i` runs from `vertices[i]` to `vertices[(i + 1) % len]`. Returns how
/// many edges triggered a bounce in this call.
pub fn resolve(ball: &mut Ball, vertices: &[Vec2]) -> usize {
    let n = vertices.len();
    let mut contacts = 0;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];

        if let Some(contact) = edge_contact(ball, i, a, b) {
            apply_contact(ball, &contact);
            contacts += 1;
            log::debug!(
                "bounce on edge {} at ({:.1}, {:.1}), overlap {:.2}, vel now ({:.2}, {:.2})",
                i,
                contact.point.x,
                contact.point.y,
                contact.overlap(ball.radius),
                ball.vel.x,
                ball.vel.y
            );
        }
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::hexagon_vertices;

    const CENTER: Vec2 = Vec2::new(400.0, 300.0);
    const EPS: f32 = 1e-3;

    fn hexagon() -> [Vec2; 6] {
        hexagon_vertices(CENTER, 200.0)
    }

    #[test]
    fn test_normals_point_into_hexagon() {
        let verts = hexagon();
        for i in 0..6 {
            let a = verts[i];
            let b = verts[(i + 1) % 6];
            let mid = (a + b) * 0.5;
            let n = edge_normal(a, b);
            assert!((n.length() - 1.0).abs() < EPS);
            assert!(n.dot(CENTER - mid) > 0.0, "edge {i} normal {n:?}");
        }
    }

    #[test]
    fn test_bottom_edge_normal_points_up() {
        let verts = hexagon();
        let n = edge_normal(verts[1], verts[2]);
        assert!((n - Vec2::new(0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn test_reflect_damped_flips_normal_component() {
        let v = Vec2::new(0.0, 100.0);
        let n = Vec2::new(0.0, -1.0);
        let reflected = reflect_damped(v, n, 0.8);
        // Normal component goes from d to (1 - 2 * damping) * d
        assert!((reflected.y - (-60.0)).abs() < EPS);
        assert!(reflected.x.abs() < EPS);
    }

    #[test]
    fn test_reflect_without_direction_guard() {
        // Already moving away from the wall (along the normal); still reflected
        let v = Vec2::new(0.0, -100.0);
        let n = Vec2::new(0.0, -1.0);
        let reflected = reflect_damped(v, n, 0.8);
        assert!((reflected.y - 60.0).abs() < EPS);
    }

    #[test]
    fn test_ball_well_inside_is_untouched() {
        let mut ball = Ball::new(CENTER, 20.0);
        ball.vel = Vec2::new(37.0, -12.0);
        let before = ball.clone();

        let contacts = resolve(&mut ball, &hexagon());

        assert_eq!(contacts, 0);
        assert_eq!(ball, before);
    }

    #[test]
    fn test_touching_rim_counts_as_contact() {
        let a = Vec2::new(100.0, 0.0);
        let b = Vec2::new(0.0, 0.0);
        let ball = Ball::new(Vec2::new(50.0, -20.0), 20.0);

        let contact = edge_contact(&ball, 0, a, b).expect("rim on the edge");
        assert_eq!(contact.overlap(ball.radius), 0.0);
        assert_eq!(contact.normal, Vec2::new(0.0, -1.0));

        let clear = Ball::new(Vec2::new(50.0, -20.5), 20.0);
        assert!(edge_contact(&clear, 0, a, b).is_none());
    }

    #[test]
    fn test_single_edge_collision() {
        let verts = hexagon();
        // Edge 0 is the lower-right side
        let (a, b) = (verts[0], verts[1]);
        let n = edge_normal(a, b);
        let mid = (a + b) * 0.5;

        let mut ball = Ball::new(mid + n * 15.0, 20.0);
        ball.vel = Vec2::new(0.0, 100.0);
        let d_before = ball.vel.dot(n);
        let tangent_before = ball.vel.perp_dot(n);

        let contacts = resolve(&mut ball, &verts);
        assert_eq!(contacts, 1);

        // No residual overlap
        let closest = closest_point_on_segment(a, b, ball.pos);
        assert!((distance(ball.pos, closest) - ball.radius).abs() < EPS);

        // Normal component flipped and scaled, tangential kept
        let d_after = ball.vel.dot(n);
        assert!(d_before < 0.0);
        assert!(d_after > 0.0);
        assert!((d_after - (1.0 - 2.0 * DAMPING) * d_before).abs() < EPS);
        assert!((ball.vel.perp_dot(n) - tangent_before).abs() < EPS);
    }

    #[test]
    fn test_corner_contacts_resolve_in_vertex_order() {
        let verts = hexagon();
        let radius = 20.0;
        // Near vertex 1, where edge 0 and edge 1 meet
        let inward = (CENTER - verts[1]).normalize();
        let start = verts[1] + inward * 15.0;

        let n0 = edge_normal(verts[0], verts[1]);
        let n1 = edge_normal(verts[1], verts[2]);

        let overlap0 = radius - distance(start, closest_point_on_segment(verts[0], verts[1], start));
        let after0 = start + n0 * overlap0;
        let overlap1 =
            radius - distance(after0, closest_point_on_segment(verts[1], verts[2], after0));
        let expected = after0 + n1 * overlap1;

        assert!(overlap0 > 0.0);
        assert!(overlap1 > 0.0);

        let mut ball = Ball::new(start, radius);
        let contacts = resolve(&mut ball, &verts);

        assert_eq!(contacts, 2);
        assert!((ball.pos - expected).length() < EPS, "got {:?}", ball.pos);

        // Not what resolving both edges from the starting position would give
        let overlap1_from_start =
            radius - distance(start, closest_point_on_segment(verts[1], verts[2], start));
        let simultaneous = start + n0 * overlap0 + n1 * overlap1_from_start;
        assert!((ball.pos - simultaneous).length() > 0.5);
    }

    #[test]
    fn test_corner_velocity_reflected_per_edge() {
        let verts = hexagon();
        let inward = (CENTER - verts[1]).normalize();
        let mut ball = Ball::new(verts[1] + inward * 15.0, 20.0);
        ball.vel = Vec2::new(50.0, 80.0);

        let n0 = edge_normal(verts[0], verts[1]);
        let n1 = edge_normal(verts[1], verts[2]);
        let expected = reflect_damped(reflect_damped(ball.vel, n0, DAMPING), n1, DAMPING);

        resolve(&mut ball, &verts);
        assert!((ball.vel - expected).length() < EPS);
    }
}
