//! Hex Bounce entry point
//!
//! Opens the window, runs the simulation until the window is closed, then
//! tears everything down.

use std::process::ExitCode;

use hex_bounce::{NativeFrontend, World, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Hex Bounce starting...");

    let frontend = match NativeFrontend::init() {
        Ok(frontend) => frontend,
        Err(e) => {
            log::error!("Failed to start: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut world = World::new();
    match run(frontend, &mut world) {
        Ok(summary) => {
            log::info!(
                "Exiting after {} frames, {} bounces",
                summary.frames,
                summary.bounces
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Render loop failed: {e}");
            ExitCode::FAILURE
        }
    }
}
