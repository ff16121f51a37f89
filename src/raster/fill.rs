use super::{Pen, PointSink, plot_span, to_fixed, visible_rows};
use crate::geometry::Point;

/// Fills the axis-aligned box spanned by two opposite corners, every grid
/// point included. Rows and columns outside the sink's clip are skipped.
pub fn fill_rect<S: PointSink + ?Sized>(sink: &mut S, corner_a: Point, corner_b: Point, pen: Pen) {
    let (ax, ay) = (to_fixed(corner_a.x), to_fixed(corner_a.y));
    let (bx, by) = (to_fixed(corner_b.x), to_fixed(corner_b.y));

    for y in visible_rows(sink, ay.min(by), ay.max(by), pen) {
        plot_span(sink, ax.min(bx), ax.max(bx), y, pen);
    }
}

/// Scanline triangle fill.
///
/// Vertices are sorted by y. Each row takes its extent from the long edge
/// (top to bottom) and from whichever short edge is active at that row (top to
/// middle, then middle to bottom). Horizontal edges contribute their whole
/// x-range instead of a slope.
pub fn fill_triangle<S: PointSink + ?Sized>(sink: &mut S, a: Point, b: Point, c: Point, pen: Pen) {
    let mut vertices = [a, b, c].map(|p| (to_fixed(p.x), to_fixed(p.y)));
    vertices.sort_by_key(|&(_, y)| y);
    let [top, mid, bottom] = vertices;

    for y in visible_rows(sink, top.1, bottom.1, pen) {
        let (long_min, long_max) = edge_extent(top, bottom, y);
        let (short_min, short_max) = if y < mid.1 {
            edge_extent(top, mid, y)
        } else {
            edge_extent(mid, bottom, y)
        };
        plot_span(sink, long_min.min(short_min), long_max.max(short_max), y, pen);
    }
}

/// The x-extent of an edge at row `y`.
fn edge_extent(from: (i64, i64), to: (i64, i64), y: i64) -> (i64, i64) {
    let dy = to.1 - from.1;
    if dy == 0 {
        return (from.0.min(to.0), from.0.max(to.0));
    }

    let x = from.0 + (to.0 - from.0) * (y - from.1) / dy;
    (x, x)
}
