//! WebGPU rendering module
//!
//! Shapes are tessellated into colored triangles on the CPU and drawn with a
//! single flat-color pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, canvas_to_ndc};
pub use vertex::{Vertex, colors};
