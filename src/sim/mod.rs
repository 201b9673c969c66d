//! Deterministic simulation module
//!
//! All gameplay physics lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no wall-clock time
//! - Stable obstacle order (platforms, then hazard boxes)
//! - No rendering, input polling or I/O

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::{AxisSweep, sweep_x, sweep_y};
pub use rect::Rect;
pub use state::{Blob, BlobTuning, BlobView};
pub use tick::{TickInput, step, tick};
pub use world::{Triangle, World};
