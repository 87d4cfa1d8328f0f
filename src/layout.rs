//! Raw vertex placement for each shape family.

use kurbo::Point;
use std::f64::consts::PI;
use crate::corners::CornerSpec;
use crate::geometry::{polar, round_point, vertex_angle};
use crate::types::Canvas;

/// Closed sequence of vertices; indices wrap around.
#[derive(Clone, PartialEq, Debug)]
pub struct VertexCycle {
    points: Vec<Point>,
}

impl VertexCycle {
    pub fn new(points: Vec<Point>) -> VertexCycle {
        VertexCycle { points }
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn points(&self) -> &[Point] { &self.points }

    /// Vertex `index` with its cyclic neighbours.
    pub fn corner(&self, index: usize, radius: f64) -> CornerSpec {
        let n = self.points.len();
        CornerSpec {
            index,
            prev: self.points[(index + n - 1) % n],
            at: self.points[index],
            next: self.points[(index + 1) % n],
            radius,
        }
    }
}

/// `count` vertices evenly spaced on a circle of `radius` around the canvas
/// center.
pub fn regular(canvas: &Canvas, count: usize, radius: f64, offset: f64) -> VertexCycle {
    let points = (0..count)
        .map(|i| polar(canvas.center(), radius, vertex_angle(i, count, offset)))
        .collect();
    VertexCycle::new(points)
}

/// `2 * count` vertices alternating between `outer` and `inner` radius.
pub fn star(canvas: &Canvas, count: usize, outer: f64, inner: f64, offset: f64) -> VertexCycle {
    let steps = count * 2;
    let points = (0..steps)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            polar(canvas.center(), radius, vertex_angle(i, steps, offset))
        })
        .collect();
    VertexCycle::new(points)
}

/// Ring of `count` equal circles, each tangent to its neighbours and to the
/// canvas' inscribed circle.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TangentRing {
    pub small_radius: f64,
    pub distance: f64, // canvas center to each small-circle center
}

impl TangentRing {
    pub fn new(canvas: &Canvas, count: usize) -> TangentRing {
        let half = (PI / count as f64).sin();
        let small_radius = canvas.radius() * half / (1.0 + half);
        TangentRing { small_radius, distance: canvas.radius() - small_radius }
    }

    pub fn centers(&self, canvas: &Canvas, count: usize, offset: f64) -> VertexCycle {
        regular(canvas, count, self.distance, offset)
    }
}

/// Largest square centered on the canvas: its top-left corner and side.
pub fn inscribed_square(canvas: &Canvas) -> (Point, f64) {
    let side = canvas.width().min(canvas.height());
    let origin = Point::new((canvas.width() - side) / 2.0, (canvas.height() - side) / 2.0);
    (origin, side)
}

/// Lobe centers tiling the border of the inscribed square, `count` per
/// edge, walked clockwise from the top-left lobe. Returns the cycle and the
/// lobe radius.
pub fn perimeter(canvas: &Canvas, count: usize) -> (VertexCycle, f64) {
    let (origin, side) = inscribed_square(canvas);
    let radius = side / (count as f64 * 2.0);
    let spacing = radius * 2.0;
    let last = count.saturating_sub(1);
    let at = |col: usize, row: usize| {
        round_point(Point::new(
            origin.x + radius + col as f64 * spacing,
            origin.y + radius + row as f64 * spacing,
        ))
    };

    let mut points = Vec::with_capacity(last.max(1).saturating_mul(4));
    points.extend((0..count).map(|col| at(col, 0)));
    points.extend((1..count).map(|row| at(last, row)));
    points.extend((0..last).rev().map(|col| at(col, last)));
    points.extend((1..last).rev().map(|row| at(0, row)));
    (VertexCycle::new(points), radius)
}

/// Corners of the inscribed square, clockwise from top-left.
pub fn square_corners(canvas: &Canvas) -> VertexCycle {
    let (origin, side) = inscribed_square(canvas);
    let (x0, y0) = (origin.x, origin.y);
    let corners = [(x0, y0), (x0 + side, y0), (x0 + side, y0 + side), (x0, y0 + side)];
    VertexCycle::new(corners.iter().map(|&(x, y)| round_point(Point::new(x, y))).collect())
}
