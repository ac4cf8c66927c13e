//! Desktop frontend: a winit window drawn with wgpu
//!
//! winit normally owns the main loop. Here events are pumped once per frame
//! instead, so the simulation loop keeps control of its own cadence.

use std::sync::Arc;
use std::time::Duration;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use super::{Canvas, Color, FrameClock, FrameEvent, Frontend, PlatformError};
use crate::consts::{CIRCLE_SEGMENTS, HEIGHT, WIDTH, WINDOW_TITLE};
use crate::renderer::{RenderState, Vertex, colors, shapes};

/// Pumps before giving up on the window being created
const WINDOW_CREATE_ATTEMPTS: u32 = 16;

/// Receives winit callbacks during a pump
#[derive(Default)]
struct WindowHandler {
    window: Option<Arc<Window>>,
    created: bool,
    create_error: Option<winit::error::OsError>,
    events: Vec<FrameEvent>,
    resized: Option<PhysicalSize<u32>>,
}

impl ApplicationHandler for WindowHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.created {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WIDTH, HEIGHT))
            .with_resizable(false);

        match event_loop.create_window(attributes) {
            Ok(window) => {
                self.window = Some(Arc::new(window));
                self.created = true;
            }
            Err(e) => {
                self.create_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.events.push(FrameEvent::Quit),
            WindowEvent::Resized(size) => self.resized = Some(size),
            _ => {}
        }
    }
}

/// Window, GPU and frame clock for the desktop build
pub struct NativeFrontend {
    // Field order is drop order: the surface must go before its window
    render: RenderState,
    window: Arc<Window>,
    event_loop: EventLoop<()>,
    handler: WindowHandler,
    clock: FrameClock,
    clear_color: Color,
    vertices: Vec<Vertex>,
}

impl NativeFrontend {
    /// Open the window and bring up the GPU
    pub fn init() -> Result<Self, PlatformError> {
        let mut event_loop = EventLoop::new()?;
        let mut handler = WindowHandler::default();

        for _ in 0..WINDOW_CREATE_ATTEMPTS {
            let status = event_loop.pump_app_events(Some(Duration::ZERO), &mut handler);
            if let Some(e) = handler.create_error.take() {
                return Err(e.into());
            }
            if handler.window.is_some() || matches!(status, PumpStatus::Exit(_)) {
                break;
            }
        }
        let window = handler.window.take().ok_or(PlatformError::WindowUnavailable)?;

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window.clone())?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            (WIDTH as f32, HEIGHT as f32),
        ))?;
        log::info!("Window {}x{} ({}x{} physical)", WIDTH, HEIGHT, size.width, size.height);

        Ok(Self {
            render,
            window,
            event_loop,
            handler,
            clock: FrameClock::new(),
            clear_color: colors::BACKGROUND,
            vertices: Vec::new(),
        })
    }
}

impl Canvas for NativeFrontend {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn stroke_polygon(&mut self, vertices: &[Vec2], color: Color, width: f32) {
        self.vertices
            .extend(shapes::polygon_outline(vertices, color, width));
    }

    fn present(&mut self) -> Result<(), PlatformError> {
        match self.render.render(&self.vertices, self.clear_color) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                self.render.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(PlatformError::OutOfMemory),
            Err(e) => {
                log::warn!("Render error: {:?}", e);
                Ok(())
            }
        }
    }
}

impl Frontend for NativeFrontend {
    fn tick(&mut self, fps: u32) -> f32 {
        self.clock.tick(fps)
    }

    fn poll_events(&mut self) -> Vec<FrameEvent> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.handler);

        if let Some(size) = self.handler.resized.take() {
            self.render.resize(size.width, size.height);
        }

        let mut events = std::mem::take(&mut self.handler.events);
        if matches!(status, PumpStatus::Exit(_)) && !events.contains(&FrameEvent::Quit) {
            events.push(FrameEvent::Quit);
        }
        events
    }

    fn shutdown(self) {
        log::info!("Closing window");
        let Self {
            render,
            window,
            event_loop,
            ..
        } = self;
        drop(render);
        window.set_visible(false);
        drop(window);
        drop(event_loop);
    }
}
