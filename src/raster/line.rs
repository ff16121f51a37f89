use super::{Pen, PointSink, plot_fixed, to_fixed};
use crate::geometry::Point;

/// Bresenham line between two endpoints, both included.
///
/// Emits `max(|dx|, |dy|) + 1` points in fixed units. The walk always starts
/// from the lexicographically smaller endpoint so that swapping the endpoints
/// yields the same point set, emitted in reverse.
pub fn bresenham_line<S: PointSink + ?Sized>(sink: &mut S, from: Point, to: Point, pen: Pen) {
    let a = (to_fixed(from.x), to_fixed(from.y));
    let b = (to_fixed(to.x), to_fixed(to.y));

    if a <= b {
        for (x, y) in walk(a, b) {
            plot_fixed(sink, x, y, pen);
        }
    } else {
        let mut points = walk(b, a).collect::<Vec<_>>();
        points.reverse();
        for (x, y) in points {
            plot_fixed(sink, x, y, pen);
        }
    }
}

fn walk(start: (i64, i64), end: (i64, i64)) -> BresenhamWalk {
    let dx = (end.0 - start.0).abs();
    let dy = (end.1 - start.1).abs();
    BresenhamWalk {
        x: start.0,
        y: start.1,
        end,
        dx,
        dy,
        sx: if start.0 < end.0 { 1 } else { -1 },
        sy: if start.1 < end.1 { 1 } else { -1 },
        err: dx - dy,
        done: false,
    }
}

struct BresenhamWalk {
    x: i64,
    y: i64,
    end: (i64, i64),
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl Iterator for BresenhamWalk {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = (self.x, self.y);
        if current == self.end {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(current)
    }
}
