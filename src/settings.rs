//! Tuning and appearance settings
//!
//! Read from an optional JSON file; anything missing falls back to `consts`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::BlobTuning;

/// Blob tuning, outline look and canvas defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Movement ===
    /// Horizontal acceleration per tick
    pub accel: f32,
    /// Horizontal speed cap
    pub max_run: f32,
    /// Airborne velocity multiplier
    pub friction_air: f32,
    /// Grounded velocity multiplier
    pub friction_ground: f32,
    /// Gravity before a level is spawned
    pub gravity: f32,
    /// Jump impulse before a level is spawned
    pub jump_v: f32,
    /// Radius before a level is spawned
    pub radius: f32,

    // === Outline ===
    pub anim_speed: f32,
    pub wobble: f32,
    pub outline_points: usize,
    pub wobble_freq: f32,
    /// Seed for the outline noise lattice
    pub noise_seed: u64,

    // === Canvas ===
    pub default_width: f32,
    pub default_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            accel: ACCEL,
            max_run: MAX_RUN,
            friction_air: FRICTION_AIR,
            friction_ground: FRICTION_GROUND,
            gravity: GRAVITY,
            jump_v: JUMP_V,
            radius: BLOB_RADIUS,

            anim_speed: ANIM_SPEED,
            wobble: WOBBLE,
            outline_points: OUTLINE_POINTS,
            wobble_freq: WOBBLE_FREQ,
            noise_seed: 0,

            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
        }
    }
}

impl Settings {
    /// Movement tuning for a freshly built blob
    pub fn tuning(&self) -> BlobTuning {
        BlobTuning {
            accel: self.accel,
            max_run: self.max_run,
            gravity: self.gravity,
            jump_v: self.jump_v,
            friction_air: self.friction_air,
            friction_ground: self.friction_ground,
        }
    }

    /// Parse settings JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// Load settings from a file, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Some(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                None => {
                    log::warn!("Invalid settings in {}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
