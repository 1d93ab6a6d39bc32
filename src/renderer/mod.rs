//! WebGPU rendering module
//!
//! The scene is rebuilt from the game state every unpaused frame as plain
//! colored rectangles and one aim line.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
