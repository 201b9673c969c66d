//! Level geometry: platforms, procedural ledges and triangle hazards
//!
//! A `World` is built once per level and is read-only afterwards. The
//! physics step only ever borrows `collidables()`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// A spike hazard: apex at `(x, y - size)`, base centred on `(x, y)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Triangle {
    /// Enclosing rectangle used for collision; bottom sits on the base
    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.x - self.size / 2.0, self.y - self.size, self.size, self.size)
    }

    /// Visual vertices: base left, base right, apex
    pub fn vertices(&self) -> [Vec2; 3] {
        let half = self.size / 2.0;
        [
            Vec2::new(self.x - half, self.y),
            Vec2::new(self.x + half, self.y),
            Vec2::new(self.x, self.y - self.size),
        ]
    }
}

/// Immutable obstacle layout for one level
#[derive(Debug, Clone)]
pub struct World {
    platforms: Vec<Rect>,
    triangles: Vec<Triangle>,
    /// Platforms first, then hazard boxes; order decides resolution ties
    collidables: Vec<Rect>,
    width: f32,
}

impl World {
    /// Build from static platforms, appending the procedural ledges and hazards
    ///
    /// `min_width` is the smallest world width; wider levels grow it.
    pub fn build(static_platforms: &[Rect], min_width: f32) -> Self {
        let mut platforms = static_platforms.to_vec();
        platforms.extend(procedural_ledges());

        // The first platform is the ground by convention; ledges guarantee one exists
        let triangles = platforms.first().map(hazards_on).unwrap_or_default();

        Self::from_parts(platforms, triangles, min_width)
    }

    /// Build from an exact platform and hazard list, no procedural additions
    pub fn from_parts(platforms: Vec<Rect>, triangles: Vec<Triangle>, min_width: f32) -> Self {
        let collidables = platforms
            .iter()
            .copied()
            .chain(triangles.iter().map(Triangle::bounding_box))
            .collect();
        let width = infer_extent(&platforms, min_width, Rect::right);

        Self {
            platforms,
            triangles,
            collidables,
            width,
        }
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Hazard collision boxes, in triangle order
    pub fn triangle_boxes(&self) -> impl Iterator<Item = Rect> + '_ {
        self.triangles.iter().map(Triangle::bounding_box)
    }

    /// Every solid region: platforms then hazard boxes
    pub fn collidables(&self) -> &[Rect] {
        &self.collidables
    }

    /// Horizontal extent the blob is kept inside
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Canvas height needed to show every platform
    pub fn infer_height(&self, min_height: f32) -> f32 {
        infer_extent(&self.platforms, min_height, Rect::bottom)
    }
}

fn infer_extent(platforms: &[Rect], min: f32, edge: fn(&Rect) -> f32) -> f32 {
    platforms.iter().map(edge).fold(min, f32::max)
}

/// Two ledges stepping up and to the right from a fixed anchor
fn procedural_ledges() -> impl Iterator<Item = Rect> {
    (0..LEDGE_COUNT).map(|i| {
        let i = i as f32;
        Rect::new(
            LEDGE_BASE_X + i * LEDGE_GAP,
            LEDGE_BASE_Y - i * LEDGE_RISE,
            LEDGE_W,
            LEDGE_H,
        )
    })
}

/// Hazards spaced evenly along the top of `ground`
fn hazards_on(ground: &Rect) -> Vec<Triangle> {
    let spacing = ground.w / (HAZARD_COUNT + 1) as f32;
    (1..=HAZARD_COUNT)
        .map(|i| Triangle {
            x: ground.x + spacing * i as f32,
            y: ground.y,
            size: HAZARD_SIZE,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> Rect {
        Rect::new(0.0, 324.0, 640.0, 36.0)
    }

    #[test]
    fn test_build_appends_ledges() {
        let world = World::build(&[ground()], DEFAULT_WIDTH);
        let p = world.platforms();
        assert_eq!(p.len(), 3);
        assert_eq!(p[0], ground());
        assert_eq!(p[1], Rect::new(90.0, 120.0, 100.0, 12.0));
        assert_eq!(p[2], Rect::new(280.0, 80.0, 100.0, 12.0));
    }

    #[test]
    fn test_hazards_spread_on_ground() {
        let world = World::build(&[ground()], DEFAULT_WIDTH);
        let t = world.triangles();
        assert_eq!(t.len(), 2);
        assert!((t[0].x - 640.0 / 3.0).abs() < 1e-4);
        assert!((t[1].x - 2.0 * 640.0 / 3.0).abs() < 1e-4);
        assert_eq!(t[0].y, 324.0);
    }

    #[test]
    fn test_triangle_bounding_box() {
        let tri = Triangle { x: 100.0, y: 324.0, size: 30.0 };
        let bb = tri.bounding_box();
        assert_eq!(bb, Rect::new(85.0, 294.0, 30.0, 30.0));
        // Bottom on the base, top at the apex
        assert_eq!(bb.bottom(), tri.y);
        assert_eq!(tri.vertices()[2].y, bb.y);
    }

    #[test]
    fn test_collidables_order() {
        let world = World::build(&[ground()], DEFAULT_WIDTH);
        let c = world.collidables();
        assert_eq!(c.len(), 5);
        assert_eq!(&c[..3], world.platforms());
        assert_eq!(c[3], world.triangles()[0].bounding_box());
        assert_eq!(c[4], world.triangles()[1].bounding_box());
    }

    #[test]
    fn test_empty_level_uses_first_ledge_as_ground() {
        let world = World::build(&[], DEFAULT_WIDTH);
        assert_eq!(world.platforms().len(), 2);
        assert_eq!(world.triangles()[0].y, LEDGE_BASE_Y);
    }

    #[test]
    fn test_infer_extents() {
        let wide = Rect::new(600.0, 400.0, 300.0, 20.0);
        let world = World::build(&[ground(), wide], DEFAULT_WIDTH);
        assert_eq!(world.width(), 900.0);
        assert_eq!(world.infer_height(DEFAULT_HEIGHT), 420.0);

        let small = World::build(&[Rect::new(0.0, 10.0, 50.0, 10.0)], DEFAULT_WIDTH);
        assert_eq!(small.width(), DEFAULT_WIDTH);
        assert_eq!(small.infer_height(DEFAULT_HEIGHT), DEFAULT_HEIGHT);
    }

    #[test]
    fn test_from_parts_is_exact() {
        let world = World::from_parts(vec![ground()], Vec::new(), 100.0);
        assert_eq!(world.collidables(), &[ground()]);
        assert_eq!(world.width(), 640.0);
    }
}
