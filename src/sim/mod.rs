//! Simulation module
//!
//! All physics lives here:
//! - Free flight with gravity and linear air drag
//! - Sequential per-edge collision response against the hexagon
//!
//! Nothing in here opens a window or talks to the GPU. Drawing goes through
//! the [`Canvas`](crate::platform::Canvas) trait.

pub mod ball;
pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use collision::{EdgeContact, apply_contact, edge_contact, edge_normal, reflect_damped, resolve};
pub use geometry::{HEXAGON_SIDES, closest_point_on_segment, distance, hexagon_vertices};
pub use state::{Hexagon, World, window_center};
pub use tick::tick;
