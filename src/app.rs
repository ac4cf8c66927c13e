//! Fixed-rate simulation loop
//!
//! One iteration per frame:
//! 1. Wait for the frame budget and read `dt`
//! 2. Drain input; a quit request ends the loop once this iteration finishes
//! 3. Step the ball and resolve wall contacts
//! 4. Redraw (background, hexagon outline, ball) and present

use crate::consts::{FPS, HEX_STROKE_WIDTH};
use crate::platform::{FrameEvent, Frontend, PlatformError};
use crate::renderer::colors;
use crate::sim::{World, tick};

/// What happened over a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Frames simulated and presented
    pub frames: u64,
    /// Wall bounces resolved
    pub bounces: u64,
}

/// Drive `world` with `frontend` until the user quits
///
/// The frontend is shut down on every exit path, including a failed present.
pub fn run<F: Frontend>(mut frontend: F, world: &mut World) -> Result<RunSummary, PlatformError> {
    log::info!(
        "Simulation running: ball r={} at ({}, {}), {} fps",
        world.ball.radius,
        world.ball.pos.x,
        world.ball.pos.y,
        FPS
    );

    let result = run_frames(&mut frontend, world);
    frontend.shutdown();
    result
}

fn run_frames<F: Frontend>(frontend: &mut F, world: &mut World) -> Result<RunSummary, PlatformError> {
    let start_frame = world.frame;
    let start_bounces = world.bounces;

    let mut running = true;
    while running {
        let dt = frontend.tick(FPS);

        for event in frontend.poll_events() {
            match event {
                FrameEvent::Quit => {
                    log::info!("Quit requested after {} frames", world.frame - start_frame);
                    running = false;
                }
            }
        }

        let contacts = tick(world, dt);
        if contacts > 1 {
            log::debug!("frame {}: {} edges touched at once", world.frame, contacts);
        }
        log::trace!(
            "frame {} dt={:.4} pos=({:.2}, {:.2}) vel=({:.2}, {:.2})",
            world.frame,
            dt,
            world.ball.pos.x,
            world.ball.pos.y,
            world.ball.vel.x,
            world.ball.vel.y
        );

        frontend.clear(colors::BACKGROUND);
        frontend.stroke_polygon(world.hexagon.vertices(), colors::HEXAGON, HEX_STROKE_WIDTH);
        world.ball.draw(frontend);
        frontend.present()?;
    }

    Ok(RunSummary {
        frames: world.frame - start_frame,
        bounces: world.bounces - start_bounces,
    })
}
