//! Triangle lists for the world and the blob

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::{Rect, World};

/// Two triangles per rectangle
pub fn rect_quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t, r, b) = (rect.x, rect.y, rect.right(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
        Vertex::new(l, b, color),
    ]
}

/// Every platform as quads
pub fn platform_mesh(world: &World, color: [f32; 4]) -> Vec<Vertex> {
    world
        .platforms()
        .iter()
        .flat_map(|p| rect_quad(p, color))
        .collect()
}

/// Hazards drawn with their visual triangle, not the collision box
pub fn hazard_mesh(world: &World, color: [f32; 4]) -> Vec<Vertex> {
    world
        .triangles()
        .iter()
        .flat_map(|t| t.vertices().map(|v| Vertex::at(v, color)))
        .collect()
}

/// Fan a closed outline around `center` into a triangle list
pub fn outline_fan(center: Vec2, outline: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if outline.len() < 3 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(outline.len() * 3);
    for (i, p) in outline.iter().enumerate() {
        let next = outline[(i + 1) % outline.len()];
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(*p, color));
        vertices.push(Vertex::at(next, color));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_WIDTH;
    use crate::level::HAZARD_COLOR;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_rect_quad_corners() {
        let quad = rect_quad(&Rect::new(10.0, 20.0, 30.0, 40.0), RED);
        assert_eq!(quad[0].position, [10.0, 20.0]);
        assert_eq!(quad[4].position, [40.0, 60.0]);
    }

    #[test]
    fn test_world_meshes() {
        let world = World::build(&[Rect::new(0.0, 324.0, 640.0, 36.0)], DEFAULT_WIDTH);
        assert_eq!(platform_mesh(&world, RED).len(), 3 * 6);

        let hazards = hazard_mesh(&world, HAZARD_COLOR);
        assert_eq!(hazards.len(), 2 * 3);
        // Apex above the base
        assert!(hazards[2].position[1] < hazards[0].position[1]);
        assert_eq!(hazards[0].color, HAZARD_COLOR);
    }

    #[test]
    fn test_outline_fan() {
        let outline = [Vec2::X, Vec2::Y, -Vec2::X, -Vec2::Y];
        let fan = outline_fan(Vec2::ZERO, &outline, RED);
        assert_eq!(fan.len(), 12);
        assert_eq!(fan[11].position, [1.0, 0.0]);
        assert!(outline_fan(Vec2::ZERO, &outline[..2], RED).is_empty());
    }
}
