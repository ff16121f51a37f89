use super::{CenteredSpans, Pen, PointSink, plot_fixed, plot_span, to_fixed};
use crate::geometry::Point;

/// Midpoint circle.
///
/// Walks one octant from the top of the circle while `x <= y`. Unfilled, each
/// step plots the eight symmetric points. Filled, each step contributes the
/// horizontal bands joining its symmetric pairs, and the union of those bands
/// is plotted row by row once the walk is done. A zero radius plots the center.
pub fn midpoint_circle<S: PointSink + ?Sized>(
    sink: &mut S,
    center: Point,
    radius: f32,
    filled: bool,
    pen: Pen,
) {
    let (cx, cy) = (to_fixed(center.x), to_fixed(center.y));
    let r = to_fixed(radius.abs());
    if r == 0 {
        plot_fixed(sink, cx, cy, pen);
        return;
    }

    let mut spans = CenteredSpans::default();
    let (mut x, mut y, mut d) = (0_i64, r, 1 - r);

    while x <= y {
        if filled {
            spans.record(y, x);
            spans.record(-y, x);
            spans.record(x, y);
            spans.record(-x, y);
        } else {
            for (ox, oy) in [(x, y), (-x, y), (x, -y), (-x, -y), (y, x), (-y, x), (y, -x), (-y, -x)] {
                plot_fixed(sink, cx + ox, cy + oy, pen);
            }
        }

        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }

    if filled {
        spans.emit(sink, cx, cy, pen);
    }
}

/// Two-region midpoint ellipse.
///
/// Region 1 is driven by x while the slope magnitude is below one, region 2 by
/// y for the rest of the quadrant. Decision variables are kept in `i128`
/// because they hold products of squared radii. A zero radius collapses the
/// ellipse into a segment along the other axis, or into its center.
pub fn midpoint_ellipse<S: PointSink + ?Sized>(
    sink: &mut S,
    center: Point,
    radius_x: f32,
    radius_y: f32,
    filled: bool,
    pen: Pen,
) {
    let (cx, cy) = (to_fixed(center.x), to_fixed(center.y));
    let (a, b) = (to_fixed(radius_x.abs()), to_fixed(radius_y.abs()));

    match (a, b) {
        (0, 0) => {
            plot_fixed(sink, cx, cy, pen);
            return;
        }
        (0, _) => {
            for y in -b..=b {
                plot_fixed(sink, cx, cy + y, pen);
            }
            return;
        }
        (_, 0) => {
            plot_span(sink, cx - a, cx + a, cy, pen);
            return;
        }
        _ => {}
    }

    let rx2 = i128::from(a) * i128::from(a);
    let ry2 = i128::from(b) * i128::from(b);
    let mut spans = CenteredSpans::default();

    let mut visit = |x: i128, y: i128| {
        let (x, y) = (x as i64, y as i64);
        if filled {
            spans.record(y, x);
            spans.record(-y, x);
        } else {
            for (ox, oy) in [(x, y), (-x, y), (x, -y), (-x, -y)] {
                plot_fixed(&mut *sink, cx + ox, cy + oy, pen);
            }
        }
    };

    let (mut x, mut y) = (0_i128, i128::from(b));

    let mut p1 = ry2 - rx2 * y + rx2 / 4;
    while ry2 * x <= rx2 * y {
        visit(x, y);
        x += 1;
        if p1 < 0 {
            p1 += 2 * ry2 * x + ry2;
        } else {
            y -= 1;
            p1 += 2 * ry2 * x - 2 * rx2 * y + ry2;
        }
    }

    // (x + 1/2)^2 expanded so the initial value stays integral.
    let mut p2 = ry2 * (x * x + x) + ry2 / 4 + rx2 * (y - 1) * (y - 1) - rx2 * ry2;
    while y >= 0 {
        visit(x, y);
        y -= 1;
        if p2 > 0 {
            p2 += rx2 - 2 * rx2 * y;
        } else {
            x += 1;
            p2 += 2 * ry2 * x - 2 * rx2 * y + rx2;
        }
    }

    if filled {
        spans.emit(sink, cx, cy, pen);
    }
}
