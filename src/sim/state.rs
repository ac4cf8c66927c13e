//! Simulation state: one ball inside one fixed hexagon

use glam::Vec2;

use super::ball::Ball;
use super::geometry::{HEXAGON_SIDES, hexagon_vertices};
use crate::consts::*;

/// The fixed hexagonal enclosure
#[derive(Debug, Clone, PartialEq)]
pub struct Hexagon {
    vertices: [Vec2; HEXAGON_SIDES],
}

impl Hexagon {
    pub fn new(center: Vec2, side_length: f32) -> Self {
        debug_assert!(side_length > 0.0, "hexagon edges must have positive length");
        Self {
            vertices: hexagon_vertices(center, side_length),
        }
    }

    /// Vertices in edge order
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Edges as `(start, end)` pairs, closing back to vertex 0
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        (0..HEXAGON_SIDES).map(|i| (self.vertices[i], self.vertices[(i + 1) % HEXAGON_SIDES]))
    }
}

/// Everything the simulation mutates or reads each frame
#[derive(Debug, Clone)]
pub struct World {
    pub ball: Ball,
    pub hexagon: Hexagon,
    /// Frames stepped so far
    pub frame: u64,
    /// Edge bounces resolved so far
    pub bounces: u64,
}

impl World {
    /// Ball at rest in the middle of the window, hexagon around it
    pub fn new() -> Self {
        let center = window_center();
        Self {
            ball: Ball::new(center, BALL_RADIUS),
            hexagon: Hexagon::new(center, HEX_SIDE_LENGTH),
            frame: 0,
            bounces: 0,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Window center, snapped to whole pixels
pub fn window_center() -> Vec2 {
    Vec2::new((WIDTH / 2) as f32, (HEIGHT / 2) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_starts_centered_and_at_rest() {
        let world = World::new();
        assert_eq!(world.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(world.ball.vel, Vec2::ZERO);
        assert_eq!(world.ball.radius, BALL_RADIUS);
        assert_eq!(world.frame, 0);
        assert_eq!(world.bounces, 0);
    }

    #[test]
    fn test_hexagon_edges_wrap() {
        let hex = Hexagon::new(Vec2::new(400.0, 300.0), 200.0);
        let edges: Vec<_> = hex.edges().collect();
        assert_eq!(edges.len(), 6);
        assert_eq!(edges[5].0, hex.vertices()[5]);
        assert_eq!(edges[5].1, hex.vertices()[0]);
        for w in edges.windows(2) {
            assert_eq!(w[0].1, w[1].0);
        }
    }
}
