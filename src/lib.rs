//! Hex Bounce - a ball under gravity and drag bouncing inside a hexagon
//!
//! Core modules:
//! - `sim`: Physics (integration, hexagon geometry, collision response)
//! - `app`: Fixed-rate simulation loop over an injected frontend
//! - `platform`: Frontend traits, frame clock, winit/wgpu desktop frontend
//! - `renderer`: WebGPU rendering pipeline and shape tessellation

pub mod app;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use app::{RunSummary, run};
pub use platform::{Canvas, FrameEvent, Frontend, NativeFrontend, PlatformError};
pub use sim::{Ball, Hexagon, World};

/// Simulation configuration constants
pub mod consts {
    /// Window size in logical pixels
    pub const WIDTH: u32 = 800;
    pub const HEIGHT: u32 = 600;
    pub const WINDOW_TITLE: &str = "Rolling Ball in a Hexagon";

    /// Distance from the hexagon center to each vertex (equal to the side length)
    pub const HEX_SIDE_LENGTH: f32 = 200.0;
    /// Outline stroke width in pixels
    pub const HEX_STROKE_WIDTH: f32 = 2.0;

    pub const BALL_RADIUS: f32 = 20.0;
    /// Triangles per ball when drawn
    pub const CIRCLE_SEGMENTS: u32 = 48;

    /// Downward acceleration, pixels/s²
    pub const GRAVITY: f32 = 0.5;
    /// Linear drag coefficient, applied as `v *= 1 - AIR_RESISTANCE * dt`
    pub const AIR_RESISTANCE: f32 = 0.02;
    /// Scales the reflection term on each wall bounce
    pub const DAMPING: f32 = 0.8;

    /// Frame rate cap
    pub const FPS: u32 = 60;
}
