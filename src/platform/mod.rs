//! Platform abstraction layer
//!
//! The simulation loop never touches a window or GPU directly. It talks to a
//! [`Frontend`], which bundles:
//! - Drawing onto a fixed-size pixel surface ([`Canvas`])
//! - Frame-rate limited timing
//! - The input event queue
//!
//! [`native::NativeFrontend`] is the winit/wgpu implementation used by the
//! binary.

pub mod clock;
pub mod native;

pub use clock::FrameClock;
pub use native::NativeFrontend;

use glam::Vec2;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Errors raised while bringing up or driving the native frontend
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("window was not created by the event loop")]
    WindowUnavailable,
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("GPU out of memory")]
    OutOfMemory,
}

/// Something reported by the event queue since the previous poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// The user asked to close the window
    Quit,
}

/// A fixed-size pixel surface with y growing downward
///
/// Draw calls accumulate into the current frame; nothing is visible until
/// [`Canvas::present`].
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Outline of the closed polygon through `vertices` (last joins first)
    fn stroke_polygon(&mut self, vertices: &[Vec2], color: Color, width: f32);

    /// Show the frame built since the last clear
    fn present(&mut self) -> Result<(), PlatformError>;
}

/// Rendering, timing and input for the simulation loop
pub trait Frontend: Canvas {
    /// Wait as needed to hold `fps`, then return seconds since the previous tick
    fn tick(&mut self, fps: u32) -> f32;

    /// Drain pending input events
    fn poll_events(&mut self) -> Vec<FrameEvent>;

    /// Release the window and GPU resources
    fn shutdown(self)
    where
        Self: Sized;
}
