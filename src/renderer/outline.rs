//! Wobbly blob outline
//!
//! Samples noise on a circle around the blob and perturbs the radius per
//! vertex. The time axis is the blob's animation phase, so the outline
//! "breathes" while the physics box stays a plain square.

use glam::Vec2;
use std::f32::consts::TAU;

use super::noise::ValueNoise;
use crate::map_range;
use crate::settings::Settings;
use crate::sim::BlobView;

/// Offset into noise space so the sample circle avoids the origin lattice
const NOISE_OFFSET: f32 = 100.0;

/// How the outline is sampled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineStyle {
    pub points: usize,
    /// Maximum radius offset either way
    pub wobble: f32,
    /// Radius of the sample circle in noise space
    pub freq: f32,
}

impl OutlineStyle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            points: settings.outline_points,
            wobble: settings.wobble,
            freq: settings.wobble_freq,
        }
    }
}

/// Closed outline, counter-clockwise in screen space starting at angle 0
pub fn blob_outline(view: &BlobView, style: &OutlineStyle, noise: &ValueNoise) -> Vec<Vec2> {
    (0..style.points)
        .map(|i| {
            let a = i as f32 / style.points as f32 * TAU;
            let (sin, cos) = a.sin_cos();

            let n = noise.sample(
                cos * style.freq + NOISE_OFFSET,
                sin * style.freq + NOISE_OFFSET,
                view.phase,
            );
            let rr = view.radius + map_range(n, 0.0, 1.0, -style.wobble, style.wobble);

            view.pos + Vec2::new(cos, sin) * rr
        })
        .collect()
}
