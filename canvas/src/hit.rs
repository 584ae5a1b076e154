#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::Triangle;
use crate::viewport::Point;

/// Strict point-in-triangle test using barycentric sign terms.
///
/// Points on an edge or vertex are outside. Winding does not matter; the
/// signed area flips the comparison for clockwise vertex order.
#[must_use]
pub fn point_in_triangle(pt: Point, tri: &Triangle) -> bool {
    let (p0, p1, p2) = (tri.p0, tri.p1, tri.p2);

    let area = 0.5 * (-p1.y * p2.x + p0.y * (-p1.x + p2.x) + p0.x * (p1.y - p2.y) + p1.x * p2.y);
    let sign = if area < 0.0 { -1.0 } else { 1.0 };

    let s = (p0.y * p2.x - p0.x * p2.y + (p2.y - p0.y) * pt.x + (p0.x - p2.x) * pt.y) * sign;
    let t = (p0.x * p1.y - p0.y * p1.x + (p0.y - p1.y) * pt.x + (p1.x - p0.x) * pt.y) * sign;

    s > 0.0 && t > 0.0 && (s + t) < 2.0 * area * sign
}

/// Index of the topmost triangle containing `pt`, scanning from the end of `triangles`.
#[must_use]
pub fn topmost_hit(pt: Point, triangles: &[Triangle]) -> Option<usize> {
    triangles
        .iter()
        .rposition(|tri| point_in_triangle(pt, tri))
}
