//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in world pixels.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::lerp_rgb;
use crate::sim::Rect;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let min = rect.min;
    let max = rect.max();
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a rectangle outline drawn inside its edges
pub fn rect_outline(outline: &Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let min = outline.min;
    let size = outline.size;
    let t = thickness.min(size.x / 2.0).min(size.y / 2.0);

    let edges = [
        Rect::new(min, Vec2::new(size.x, t)),
        Rect::new(Vec2::new(min.x, min.y + size.y - t), Vec2::new(size.x, t)),
        Rect::new(Vec2::new(min.x, min.y + t), Vec2::new(t, size.y - 2.0 * t)),
        Rect::new(
            Vec2::new(min.x + size.x - t, min.y + t),
            Vec2::new(t, size.y - 2.0 * t),
        ),
    ];

    edges.iter().flat_map(|edge| rect(edge, color)).collect()
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a five-pointed star, point up
pub fn star(center: Vec2, outer_radius: f32, inner_radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    const POINTS: u32 = 5;
    let corners = POINTS * 2;
    let mut vertices = Vec::with_capacity((corners * 3) as usize);

    let corner = |i: u32| {
        // y grows downward, so -PI/2 points up
        let theta = -PI / 2.0 + i as f32 * PI / POINTS as f32;
        let r = if i.is_multiple_of(2) {
            outer_radius
        } else {
            inner_radius
        };
        center + Vec2::new(r * theta.cos(), r * theta.sin())
    };

    for i in 0..corners {
        let a = corner(i);
        let b = corner((i + 1) % corners);
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

/// Generate vertices for a triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Vertical gradient filling `area`, split into `bands` flat strips.
/// Band `i` takes the color `i / bands` of the way from `top` to `bottom`.
pub fn vertical_gradient(area: &Rect, top: [u8; 3], bottom: [u8; 3], bands: u32) -> Vec<Vertex> {
    let bands = bands.max(1);
    let band_height = area.size.y / bands as f32;
    let mut vertices = Vec::with_capacity((bands * 6) as usize);

    for i in 0..bands {
        let color = lerp_rgb(top, bottom, i as f32 / bands as f32);
        let band = Rect::new(
            Vec2::new(area.min.x, area.min.y + band_height * i as f32),
            Vec2::new(area.size.x, band_height),
        );
        vertices.extend(rect(&band, color));
    }

    vertices
}
