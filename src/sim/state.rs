//! Blob state and tuning
//!
//! All state the physics step reads or writes lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::level::LevelData;
use crate::settings::Settings;

/// Movement tuning, level-supplied or default
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlobTuning {
    pub accel: f32,
    pub max_run: f32,
    pub gravity: f32,
    /// Jump impulse (negative is up)
    pub jump_v: f32,
    pub friction_air: f32,
    pub friction_ground: f32,
}

impl Default for BlobTuning {
    fn default() -> Self {
        Self {
            accel: ACCEL,
            max_run: MAX_RUN,
            gravity: GRAVITY,
            jump_v: JUMP_V,
            friction_air: FRICTION_AIR,
            friction_ground: FRICTION_GROUND,
        }
    }
}

/// The player blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blob {
    /// Center position
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    pub tuning: BlobTuning,
    /// True only in the tick a downward collision was resolved
    pub on_ground: bool,
    /// Outline animation phase
    pub phase: f32,
    pub phase_speed: f32,
}

impl Default for Blob {
    fn default() -> Self {
        Self::new()
    }
}

impl Blob {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            radius: BLOB_RADIUS,
            vel: Vec2::ZERO,
            tuning: BlobTuning::default(),
            on_ground: false,
            phase: 0.0,
            phase_speed: ANIM_SPEED,
        }
    }

    /// Blob with tuning and animation speed taken from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            radius: settings.radius,
            tuning: settings.tuning(),
            phase_speed: settings.anim_speed,
            ..Self::new()
        }
    }

    /// Apply level physics and place the blob at the level's start
    ///
    /// Velocity and grounding are reset; accel, run cap and friction are kept.
    pub fn spawn_from_level(&mut self, level: &LevelData) {
        self.tuning.gravity = level.gravity;
        self.tuning.jump_v = level.jump_v;

        self.pos = Vec2::new(level.start.x, level.start.y);
        self.radius = level.start.r;

        self.vel = Vec2::ZERO;
        self.on_ground = false;
    }

    /// Jump impulse, only while grounded
    ///
    /// Returns whether the impulse was applied. Callers feed this once per
    /// press, not once per tick the key is held.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.vel.y = self.tuning.jump_v;
        self.on_ground = false;
        true
    }

    /// Collision box around the blob's circle
    pub fn bounding_box(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }

    /// Read-only snapshot for renderers
    pub fn view(&self) -> BlobView {
        BlobView {
            pos: self.pos,
            radius: self.radius,
            vel: self.vel,
            on_ground: self.on_ground,
            phase: self.phase,
        }
    }
}

/// What a renderer is allowed to see of the blob
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobView {
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    pub on_ground: bool,
    pub phase: f32,
}
