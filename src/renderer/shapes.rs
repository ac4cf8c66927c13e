//! Triangle tessellation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Triangle fan for a filled circle, flattened into a triangle list
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let rim = |i: u32| center + Vec2::from_angle(i as f32 / segments as f32 * TAU) * radius;

    (0..segments)
        .flat_map(|i| [center, rim(i), rim(i + 1)])
        .map(|p| Vertex::at(p, color))
        .collect()
}

/// Generate vertices for the outline of a closed polygon
///
/// Each edge becomes a quad `width` wide centered on the edge line. Quads are
/// lengthened by half the width at both ends so neighbouring edges overlap
/// and the corners come out filled.
pub fn polygon_outline(points: &[Vec2], color: [f32; 4], width: f32) -> Vec<Vertex> {
    if points.len() < 2 || width <= 0.0 {
        return Vec::new();
    }

    let half = width * 0.5;
    let mut vertices = Vec::with_capacity(points.len() * 6);

    for (i, &p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];

        let dir = (p2 - p1).normalize_or_zero();
        if dir == Vec2::ZERO {
            continue;
        }
        // Perpendicular for width
        let perp = Vec2::new(-dir.y, dir.x);

        let start = p1 - dir * half;
        let end = p2 + dir * half;

        let offset = perp * half;
        let quad = [
            start + offset,
            start - offset,
            end + offset,
            end + offset,
            start - offset,
            end - offset,
        ];
        vertices.extend(quad.map(|p| Vertex::at(p, color)));
    }

    vertices
}
