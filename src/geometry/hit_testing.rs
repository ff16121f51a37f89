//! Distance and containment predicates shared by the shape hit tests.

use super::Point;

/// Below this the barycentric denominator is treated as a degenerate triangle.
const DEGENERATE_AREA: f32 = 1e-4;

/// Distance from `point` to the segment `start..end`, clamped to its endpoints.
pub fn distance_to_segment(point: Point, start: Point, end: Point) -> f32 {
    let (cx, cy) = (end.x - start.x, end.y - start.y);
    let len_sq = cx * cx + cy * cy;
    if len_sq == 0.0 {
        return point.distance(start);
    }

    let t = (((point.x - start.x) * cx + (point.y - start.y) * cy) / len_sq).clamp(0.0, 1.0);
    point.distance_to(start.x + t * cx, start.y + t * cy)
}

/// Barycentric point-in-triangle test, edges inclusive.
///
/// Collinear or coincident vertices never contain anything.
pub fn point_in_triangle(point: Point, a: Point, b: Point, c: Point) -> bool {
    let denominator = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
    if denominator.abs() < DEGENERATE_AREA {
        return false;
    }

    let u = ((b.y - c.y) * (point.x - c.x) + (c.x - b.x) * (point.y - c.y)) / denominator;
    let v = ((c.y - a.y) * (point.x - c.x) + (a.x - c.x) * (point.y - c.y)) / denominator;
    let w = 1.0 - u - v;

    (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v) && (0.0..=1.0).contains(&w)
}
