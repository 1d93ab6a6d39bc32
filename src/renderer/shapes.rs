//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in playfield pixel coordinates.

use glam::Vec2;

use super::vertex::Vertex;

/// Filled axis-aligned rectangle (top-left origin)
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> [Vertex; 6] {
    gradient_rect(x, y, width, height, color, color)
}

/// Rectangle shaded from `top` color to `bottom` color
pub fn gradient_rect(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    top: [f32; 4],
    bottom: [f32; 4],
) -> [Vertex; 6] {
    let (x0, y0, x1, y1) = (x, y, x + width, y + height);
    [
        Vertex::new(x0, y0, top),
        Vertex::new(x1, y0, top),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x1, y0, top),
        Vertex::new(x1, y1, bottom),
    ]
}

/// Line segment drawn as a thin quad
pub fn line(from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}
