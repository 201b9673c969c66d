//! Blob World - a tiny 2D platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (blob physics, AABB collision, world geometry)
//! - `level`: Level data loading (JSON level sets, themes)
//! - `game`: Session glue (active level, blob, progression)
//! - `renderer`: Renderer-facing geometry (wobbly outline, vertex colors)
//! - `platform`: Raw input to per-tick input mapping
//! - `settings`: Data-driven tuning and appearance

pub mod game;
pub mod level;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use level::{LevelData, LevelLoadError, LevelSet, Theme};
pub use settings::Settings;

/// Default tuning constants
pub mod consts {
    /// Blob radius before a level overrides it
    pub const BLOB_RADIUS: f32 = 26.0;
    /// Horizontal acceleration per tick while a direction is held
    pub const ACCEL: f32 = 0.55;
    /// Horizontal speed cap (pixels/tick)
    pub const MAX_RUN: f32 = 4.0;
    /// Downward acceleration per tick (levels usually override)
    pub const GRAVITY: f32 = 0.65;
    /// Jump impulse, negative is up (levels usually override)
    pub const JUMP_V: f32 = -11.0;
    /// Horizontal velocity multiplier while airborne (keeps momentum)
    pub const FRICTION_AIR: f32 = 0.995;
    /// Horizontal velocity multiplier while grounded (stops quickly)
    pub const FRICTION_GROUND: f32 = 0.88;

    /// Outline animation phase advance per tick
    pub const ANIM_SPEED: f32 = 0.01;
    /// Maximum outline radius offset (pixels)
    pub const WOBBLE: f32 = 7.0;
    /// Number of outline vertices
    pub const OUTLINE_POINTS: usize = 48;
    /// Noise sampling frequency around the outline circle
    pub const WOBBLE_FREQ: f32 = 0.9;

    /// Minimum canvas size; levels can grow it
    pub const DEFAULT_WIDTH: f32 = 640.0;
    pub const DEFAULT_HEIGHT: f32 = 360.0;

    /// Procedural ledges appended to every level
    pub const LEDGE_COUNT: usize = 2;
    pub const LEDGE_BASE_X: f32 = 90.0;
    pub const LEDGE_BASE_Y: f32 = 120.0;
    pub const LEDGE_GAP: f32 = 190.0;
    pub const LEDGE_RISE: f32 = 40.0;
    pub const LEDGE_W: f32 = 100.0;
    pub const LEDGE_H: f32 = 12.0;

    /// Triangle hazards spread along the ground platform
    pub const HAZARD_COUNT: usize = 2;
    pub const HAZARD_SIZE: f32 = 30.0;
}

/// Clamp `value` into `[low, high]` without panicking when `low > high`
///
/// Lower bound is applied first, so an inverted range resolves to `high`.
#[inline]
pub fn constrain(value: f32, low: f32, high: f32) -> f32 {
    value.max(low).min(high)
}

/// Linearly remap `value` from `[start1, stop1]` to `[start2, stop2]`
#[inline]
pub fn map_range(value: f32, start1: f32, stop1: f32, start2: f32, stop2: f32) -> f32 {
    start2 + (stop2 - start2) * ((value - start1) / (stop1 - start1))
}
