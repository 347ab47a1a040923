//! Shape generation for 2D primitives
//!
//! All shapes are emitted in screen pixels (origin top-left, y down) as
//! triangle lists.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Same color with its alpha scaled
pub fn fade(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], color[3] * alpha]
}

/// Two triangles between four corners (clockwise or counter-clockwise)
fn quad(a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4], out: &mut Vec<Vertex>) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));

    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(c.x, c.y, color));
    out.push(Vertex::new(d.x, d.y, color));
}

/// Generate vertices for a filled rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    quad(
        r.min,
        Vec2::new(r.max.x, r.min.y),
        r.max,
        Vec2::new(r.min.x, r.max.y),
        color,
        &mut vertices,
    );
    vertices
}

/// Generate vertices for a rectangle border drawn inside `r`
pub fn rect_outline(r: &Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(r.width() / 2.0).min(r.height() / 2.0);
    let mut vertices = Vec::with_capacity(24);
    let edges = [
        // Top, bottom, left, right
        Rect::new(r.min, Vec2::new(r.max.x, r.min.y + t)),
        Rect::new(Vec2::new(r.min.x, r.max.y - t), r.max),
        Rect::new(Vec2::new(r.min.x, r.min.y + t), Vec2::new(r.min.x + t, r.max.y - t)),
        Rect::new(Vec2::new(r.max.x - t, r.min.y + t), Vec2::new(r.max.x, r.max.y - t)),
    ];
    for edge in edges {
        vertices.extend(rect(&edge, color));
    }
    vertices
}

/// Generate vertices for a filled rectangle with rounded corners
pub fn rounded_rect(r: &Rect, radius: f32, color: [f32; 4], corner_segments: u32) -> Vec<Vertex> {
    let radius = radius.min(r.width() / 2.0).min(r.height() / 2.0).max(0.0);
    let mut vertices = Vec::new();

    // Center cross
    vertices.extend(rect(
        &Rect::new(Vec2::new(r.min.x + radius, r.min.y), Vec2::new(r.max.x - radius, r.max.y)),
        color,
    ));
    vertices.extend(rect(
        &Rect::new(
            Vec2::new(r.min.x, r.min.y + radius),
            Vec2::new(r.min.x + radius, r.max.y - radius),
        ),
        color,
    ));
    vertices.extend(rect(
        &Rect::new(
            Vec2::new(r.max.x - radius, r.min.y + radius),
            Vec2::new(r.max.x, r.max.y - radius),
        ),
        color,
    ));

    // Quarter circles, starting angle per corner (y down)
    let corners = [
        (Vec2::new(r.max.x - radius, r.min.y + radius), -PI / 2.0),
        (Vec2::new(r.max.x - radius, r.max.y - radius), 0.0),
        (Vec2::new(r.min.x + radius, r.max.y - radius), PI / 2.0),
        (Vec2::new(r.min.x + radius, r.min.y + radius), PI),
    ];
    for (center, start) in corners {
        for i in 0..corner_segments {
            let theta1 = start + (i as f32 / corner_segments as f32) * PI / 2.0;
            let theta2 = start + ((i + 1) as f32 / corner_segments as f32) * PI / 2.0;
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
    }

    vertices
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

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let point = |r: f32, theta: f32| Vec2::new(center.x + r * theta.cos(), center.y + r * theta.sin());
        quad(
            point(inner_radius, theta1),
            point(outer_radius, theta1),
            point(outer_radius, theta2),
            point(inner_radius, theta2),
            color,
            &mut vertices,
        );
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_two_triangles_inside_bounds() {
        let r = Rect::from_origin_size(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        let vertices = rect(&r, [1.0; 4]);
        assert_eq!(vertices.len(), 6);
        for v in &vertices {
            assert!(r.contains_point(Vec2::from(v.position)));
        }
    }

    #[test]
    fn test_outline_stays_inside() {
        let r = Rect::from_origin_size(Vec2::ZERO, Vec2::splat(100.0));
        let vertices = rect_outline(&r, 6.0, [1.0; 4]);
        assert_eq!(vertices.len(), 24);
        assert!(vertices.iter().all(|v| r.contains_point(Vec2::from(v.position))));
    }

    #[test]
    fn test_rounded_rect_stays_inside() {
        let r = Rect::from_origin_size(Vec2::new(5.0, 5.0), Vec2::splat(100.0));
        let vertices = rounded_rect(&r, 20.0, [1.0; 4], 4);
        assert_eq!(vertices.len() % 3, 0);
        assert!(vertices.iter().all(|v| r.inflate(1e-3).contains_point(Vec2::from(v.position))));
    }

    #[test]
    fn test_circle_and_ring_counts() {
        assert_eq!(circle(Vec2::ZERO, 10.0, [1.0; 4], 16).len(), 48);
        assert_eq!(ring(Vec2::ZERO, 5.0, 10.0, [1.0; 4], 16).len(), 96);
    }

    #[test]
    fn test_fade() {
        assert_eq!(fade([0.1, 0.2, 0.3, 0.8], 0.5), [0.1, 0.2, 0.3, 0.4]);
    }
}
