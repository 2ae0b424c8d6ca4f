//! WebGPU rendering module
//!
//! The scene is rebuilt as a flat-colored triangle list every frame and
//! uploaded to a single vertex buffer.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
