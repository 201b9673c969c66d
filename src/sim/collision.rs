//! Axis-separated AABB collision response
//!
//! The box is moved along one axis, then each obstacle is visited in list
//! order. An overlapping obstacle snaps the box flush against its near face
//! and kills the velocity on that axis. Later obstacles see the already
//! corrected box and velocity, so this is a single sequential pass rather
//! than a simultaneous contact solve.

use super::rect::Rect;

/// Outcome of sweeping the box along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSweep {
    /// Box after displacement and correction
    pub rect: Rect,
    /// Velocity on the swept axis after collisions
    pub vel: f32,
    /// Number of obstacles the box overlapped during the pass
    pub contacts: u32,
    /// A falling box was snapped onto an obstacle top (vertical sweeps only)
    pub landed: bool,
}

impl AxisSweep {
    fn start(rect: Rect, vel: f32) -> Self {
        Self {
            rect,
            vel,
            contacts: 0,
            landed: false,
        }
    }
}

/// Move the box by `vx` and resolve against `obstacles` horizontally
pub fn sweep_x(rect: Rect, vx: f32, obstacles: &[Rect]) -> AxisSweep {
    let moved = Rect { x: rect.x + vx, ..rect };

    obstacles
        .iter()
        .fold(AxisSweep::start(moved, vx), |mut acc, obstacle| {
            if acc.rect.overlaps(obstacle) {
                if acc.vel > 0.0 {
                    acc.rect.x = obstacle.x - acc.rect.w;
                } else if acc.vel < 0.0 {
                    acc.rect.x = obstacle.right();
                }
                acc.vel = 0.0;
                acc.contacts += 1;
            }
            acc
        })
}

/// Move the box by `vy` and resolve against `obstacles` vertically
pub fn sweep_y(rect: Rect, vy: f32, obstacles: &[Rect]) -> AxisSweep {
    let moved = Rect { y: rect.y + vy, ..rect };

    obstacles
        .iter()
        .fold(AxisSweep::start(moved, vy), |mut acc, obstacle| {
            if acc.rect.overlaps(obstacle) {
                if acc.vel > 0.0 {
                    // Falling onto a top face
                    acc.rect.y = obstacle.y - acc.rect.h;
                    acc.landed = true;
                } else if acc.vel < 0.0 {
                    // Head bump on an underside
                    acc.rect.y = obstacle.bottom();
                }
                acc.vel = 0.0;
                acc.contacts += 1;
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_x_into_wall_from_left() {
        let wall = Rect::new(100.0, 0.0, 20.0, 100.0);
        let rect = Rect::new(46.0, 20.0, 52.0, 52.0);
        let sweep = sweep_x(rect, 4.0, &[wall]);
        assert_eq!(sweep.rect.x, wall.x - rect.w);
        assert_eq!(sweep.vel, 0.0);
        assert_eq!(sweep.contacts, 1);
    }

    #[test]
    fn test_sweep_x_into_wall_from_right() {
        let wall = Rect::new(100.0, 0.0, 20.0, 100.0);
        let rect = Rect::new(122.0, 20.0, 52.0, 52.0);
        let sweep = sweep_x(rect, -4.0, &[wall]);
        assert_eq!(sweep.rect.x, 120.0);
        assert_eq!(sweep.vel, 0.0);
    }

    #[test]
    fn test_sweep_x_clear_path() {
        let wall = Rect::new(100.0, 0.0, 20.0, 100.0);
        let rect = Rect::new(0.0, 20.0, 52.0, 52.0);
        let sweep = sweep_x(rect, 4.0, &[wall]);
        assert_eq!(sweep.rect.x, 4.0);
        assert_eq!(sweep.vel, 4.0);
        assert_eq!(sweep.contacts, 0);
    }

    #[test]
    fn test_sweep_x_touching_is_not_contact() {
        let wall = Rect::new(100.0, 0.0, 20.0, 100.0);
        let rect = Rect::new(44.0, 20.0, 52.0, 52.0);
        let sweep = sweep_x(rect, 4.0, &[wall]);
        assert_eq!(sweep.rect.right(), wall.x);
        assert_eq!(sweep.vel, 4.0);
    }

    #[test]
    fn test_sweep_y_landing() {
        let floor = Rect::new(0.0, 300.0, 640.0, 36.0);
        let rect = Rect::new(10.0, 248.0, 52.0, 52.0);
        let sweep = sweep_y(rect, 0.65, &[floor]);
        assert_eq!(sweep.rect.bottom(), 300.0);
        assert_eq!(sweep.vel, 0.0);
        assert!(sweep.landed);
    }

    #[test]
    fn test_sweep_y_head_bump_does_not_land() {
        let ceiling = Rect::new(0.0, 0.0, 640.0, 12.0);
        let rect = Rect::new(10.0, 15.0, 52.0, 52.0);
        let sweep = sweep_y(rect, -11.0, &[ceiling]);
        assert_eq!(sweep.rect.y, 12.0);
        assert_eq!(sweep.vel, 0.0);
        assert!(!sweep.landed);
    }

    #[test]
    fn test_later_obstacles_see_corrected_velocity() {
        // The first floor zeroes vy, so the taller block that still overlaps
        // the corrected box is counted but not snapped against
        let floor = Rect::new(0.0, 290.0, 100.0, 10.0);
        let block = Rect::new(0.0, 280.0, 100.0, 30.0);
        let rect = Rect::new(10.0, 240.0, 52.0, 52.0);
        let sweep = sweep_y(rect, 5.0, &[floor, block]);
        assert_eq!(sweep.rect.bottom(), 290.0);
        assert!(sweep.rect.overlaps(&block));
        assert_eq!(sweep.contacts, 2);
        assert!(sweep.landed);
    }

    #[test]
    fn test_order_decides_resolution() {
        let high = Rect::new(0.0, 290.0, 100.0, 10.0);
        let low = Rect::new(0.0, 295.0, 100.0, 10.0);
        let rect = Rect::new(10.0, 240.0, 52.0, 52.0);
        let sweep = sweep_y(rect, 5.0, &[low, high]);
        // Snapped onto `low`, still overlapping `high` but velocity is already zero
        assert_eq!(sweep.rect.bottom(), 295.0);
        assert!(sweep.rect.overlaps(&high));
    }

    #[test]
    fn test_no_obstacles() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let sweep = sweep_y(rect, 3.0, &[]);
        assert_eq!(sweep.rect.y, 3.0);
        assert_eq!(sweep.vel, 3.0);
        assert!(!sweep.landed);
    }
}
