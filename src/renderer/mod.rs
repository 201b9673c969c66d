//! Renderer-facing geometry
//!
//! Builds vertex data from read-only views of the simulation. No GPU code
//! lives here; the host uploads `Vertex` slices however it likes.

pub mod noise;
pub mod outline;
pub mod shapes;
pub mod vertex;

pub use noise::ValueNoise;
pub use outline::{OutlineStyle, blob_outline};
pub use vertex::Vertex;
