//! Per-frame simulation tick
//!
//! Advances the blob deterministically: input, friction, gravity, then the
//! axis-separated sweep against every collidable.

use super::collision::{sweep_x, sweep_y};
use super::rect::Rect;
use super::state::Blob;
use super::world::World;
use crate::constrain;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Jump pressed this tick (edge, not level)
    pub jump: bool,
}

impl TickInput {
    /// Net horizontal direction: -1, 0 or +1; opposite keys cancel
    pub fn direction(&self) -> f32 {
        let mut dir = 0.0;
        if self.left {
            dir -= 1.0;
        }
        if self.right {
            dir += 1.0;
        }
        dir
    }
}

/// Advance the blob by one tick against `world`
pub fn tick(blob: &mut Blob, world: &World, input: &TickInput) {
    if input.jump {
        blob.jump();
    }
    step(blob, world.collidables(), world.width(), input.direction());
}

/// Physics and collision for one tick
///
/// `dir` is the net horizontal input. Friction uses last tick's grounding,
/// which is only refreshed by the vertical sweep below.
pub fn step(blob: &mut Blob, obstacles: &[Rect], world_width: f32, dir: f32) {
    let t = blob.tuning;

    blob.vel.x += t.accel * dir;
    blob.vel.x *= if blob.on_ground {
        t.friction_ground
    } else {
        t.friction_air
    };
    blob.vel.x = constrain(blob.vel.x, -t.max_run, t.max_run);

    // No terminal velocity
    blob.vel.y += t.gravity;

    let rect = blob.bounding_box();

    let horizontal = sweep_x(rect, blob.vel.x, obstacles);
    blob.vel.x = horizontal.vel;

    let vertical = sweep_y(horizontal.rect, blob.vel.y, obstacles);
    blob.vel.y = vertical.vel;
    blob.on_ground = vertical.landed;

    blob.pos = vertical.rect.center();
    // Only horizontal bounds; falling out the bottom is allowed
    blob.pos.x = constrain(blob.pos.x, blob.radius, world_width - blob.radius);

    blob.phase += blob.phase_speed;
}
