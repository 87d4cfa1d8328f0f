//! Numeric policy and vector helpers shared by every shape family.

use kurbo::{Point, Vec2};
use std::f64::consts::PI;

/// Round to two decimal places, halves away from zero.
///
/// All coordinates pass through here before they are stored or printed so
/// output is deterministic and compact.
pub fn round2(value: f64) -> f64 {
    // adding 0.0 folds -0.0 into 0.0
    (value * 100.0).round() / 100.0 + 0.0
}

/// Wrap `value` into `[min, max]` by periodic repetition with period
/// `max - min`.
///
/// Values already inside the range are returned as they are, so both ends
/// stay reachable (a rounding of 100 % stays 100 %). Anything outside wraps
/// into `[min, max)`: `clamp_loop(105.0, 0.0, 100.0) == 5.0` and
/// `clamp_loop(-30.0, 0.0, 100.0) == 70.0`.
pub fn clamp_loop(value: f64, min: f64, max: f64) -> f64 {
    if (min..=max).contains(&value) {
        return value;
    }
    let range = max - min;
    if range <= 0.0 || !value.is_finite() {
        return min;
    }
    min + (value - min).rem_euclid(range)
}

pub fn round_point(p: Point) -> Point {
    Point::new(round2(p.x), round2(p.y))
}

/// Point at `radius` from `center` along `angle` (radians, y down), rounded.
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    round_point(Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin()))
}

/// Angle of vertex `i` out of `count` evenly spaced vertices, starting at
/// twelve o'clock and advanced by `offset` radians.
pub fn vertex_angle(i: usize, count: usize, offset: f64) -> f64 {
    i as f64 * (2.0 * PI / count as f64) - PI / 2.0 + offset
}

/// Unit vector pointing from `from` towards `to`, or `None` when the two
/// points coincide.
pub fn unit_toward(from: Point, to: Point) -> Option<Vec2> {
    let v = to - from;
    let len = v.hypot();
    if len == 0.0 {
        None
    } else {
        Some(v / len)
    }
}

/// Side length of a regular `count`-gon inscribed in a circle of `radius`.
pub fn chord(radius: f64, count: usize) -> f64 {
    2.0 * radius * (PI / count as f64).sin()
}
