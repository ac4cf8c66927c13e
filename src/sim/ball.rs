//! The ball and its free-flight integration

use glam::Vec2;

use crate::consts::{AIR_RESISTANCE, GRAVITY};
use crate::platform::Canvas;
use crate::renderer::colors;

/// The single ball in the enclosure
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Center in screen pixels
    pub pos: Vec2,
    /// Pixels per second, y positive downward
    pub vel: Vec2,
    /// Fixed for the ball's lifetime
    pub radius: f32,
}

impl Ball {
    /// A resting ball centered at `pos`
    pub fn new(pos: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Advance one step of semi-implicit Euler
    ///
    /// Gravity first, then drag on both axes with the same linear factor
    /// `1 - AIR_RESISTANCE * dt`, then position from the updated velocity.
    /// The linear drag factor makes the decay frame-rate dependent.
    pub fn update(&mut self, dt: f32) {
        self.vel.y += GRAVITY * dt;

        let drag = 1.0 - AIR_RESISTANCE * dt;
        self.vel.x *= drag;
        self.vel.y *= drag;

        self.pos.x += self.vel.x * dt;
        self.pos.y += self.vel.y * dt;
    }

    /// Paint the ball at its whole-pixel position
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.fill_circle(self.pos.trunc(), self.radius, colors::BALL);
    }
}
