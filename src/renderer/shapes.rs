//! Triangle lists for 2D primitives

use glam::Vec2;

use super::scene::{Rect, Scene};
use super::vertex::Vertex;
use crate::consts::{GAME_HEIGHT, GAME_WIDTH};

/// Vertices emitted per rectangle
pub const QUAD_VERTICES: usize = 6;

/// Two triangles covering a rectangle. The first vertex is the top-left
/// corner and the last the bottom-right.
pub fn rect(rect: &Rect) -> [Vertex; QUAD_VERTICES] {
    let min = Vec2::new(rect.x, rect.y);
    let max = min + Vec2::new(rect.w, rect.h);
    let c = rect.color;
    [
        Vertex::new(min.x, min.y, c),
        Vertex::new(max.x, min.y, c),
        Vertex::new(min.x, max.y, c),
        Vertex::new(min.x, max.y, c),
        Vertex::new(max.x, min.y, c),
        Vertex::new(max.x, max.y, c),
    ]
}

/// Map playfield coordinates (y down) to clip space (y up, -1..1)
pub fn to_clip(v: Vertex) -> Vertex {
    let [x, y] = v.position;
    Vertex {
        position: [x / GAME_WIDTH * 2.0 - 1.0, 1.0 - y / GAME_HEIGHT * 2.0],
        color: v.color,
    }
}

/// Map clip space back to playfield coordinates
pub fn from_clip(v: Vertex) -> Vertex {
    let [x, y] = v.position;
    Vertex {
        position: [(x + 1.0) / 2.0 * GAME_WIDTH, (1.0 - y) / 2.0 * GAME_HEIGHT],
        color: v.color,
    }
}

/// Flatten a scene's rectangles into a clip-space triangle list, skipping
/// anything fully off screen
pub fn scene_vertices(scene: &Scene) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(scene.rects.len() * QUAD_VERTICES);
    for r in scene.rects.iter().filter(|r| is_visible(r)) {
        vertices.extend(rect(r).into_iter().map(to_clip));
    }
    vertices
}

fn is_visible(r: &Rect) -> bool {
    r.w > 0.0
        && r.h > 0.0
        && r.x < GAME_WIDTH
        && r.x + r.w > 0.0
        && r.y < GAME_HEIGHT
        && r.y + r.h > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    #[test]
    fn test_full_screen_rect_maps_to_clip_corners() {
        let full = Rect::new(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT, colors::SKY);
        let verts: Vec<[f32; 2]> = rect(&full).into_iter().map(|v| to_clip(v).position).collect();
        assert_eq!(verts[0], [-1.0, 1.0]);
        assert_eq!(verts[5], [1.0, -1.0]);
    }

    #[test]
    fn test_offscreen_rects_are_skipped() {
        let scene = Scene {
            rects: vec![
                Rect::new(10.0, 10.0, 5.0, 5.0, colors::CLOUD),
                Rect::new(900.0, 10.0, 5.0, 5.0, colors::CLOUD),
                Rect::new(-50.0, 10.0, 40.0, 5.0, colors::CLOUD),
            ],
            texts: Vec::new(),
        };
        assert_eq!(scene_vertices(&scene).len(), QUAD_VERTICES);
    }

    #[test]
    fn test_quad_corners_map_back_to_pixels() {
        let r = Rect::new(100.0, 50.0, 40.0, 20.0, colors::BARREL);
        let quad = scene_vertices(&Scene {
            rects: vec![r],
            texts: Vec::new(),
        });
        let min = from_clip(quad[0]).position;
        let max = from_clip(quad[QUAD_VERTICES - 1]).position;
        assert!((min[0] - 100.0).abs() < 1e-3 && (min[1] - 50.0).abs() < 1e-3);
        assert!((max[0] - 140.0).abs() < 1e-3 && (max[1] - 70.0).abs() < 1e-3);
        assert_eq!(quad[0].color, colors::BARREL);
    }
}
