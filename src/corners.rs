//! Replacing a sharp vertex with a curve.
//!
//! A corner is entered at a point `radius` away from the vertex towards the
//! previous vertex and left at a point `radius` away towards the next one.
//! What joins those two points is either a quadratic curve with the vertex
//! as control point, or a circular arc of the same radius.

use kurbo::Point;
use crate::error::{Result, ShapeError};
use crate::geometry::{round2, round_point, unit_toward};

/// The two SVG arc flags that pick one of the four candidate arcs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ArcFlags {
    pub large_arc: bool,
    pub sweep: bool,
}

impl ArcFlags {
    /// Outward bulge around a lobe center.
    pub const CONVEX: ArcFlags = ArcFlags { large_arc: true, sweep: true };
    /// Inward scoop between two lobes.
    pub const CONCAVE: ArcFlags = ArcFlags { large_arc: false, sweep: false };
    /// Minor clockwise arc, used to round off a right angle.
    pub const QUARTER: ArcFlags = ArcFlags { large_arc: false, sweep: true };
}

/// Which flags each vertex of a cycle gets.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArcPolicy {
    Uniform(ArcFlags),
    Alternating { even: ArcFlags, odd: ArcFlags },
}

impl ArcPolicy {
    pub fn flags_at(&self, index: usize) -> ArcFlags {
        match *self {
            ArcPolicy::Uniform(flags) => flags,
            ArcPolicy::Alternating { even, odd } => if index % 2 == 0 { even } else { odd },
        }
    }
}

/// How the gap between a corner's entry and exit is bridged.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CornerStyle {
    Quadratic,
    Arc(ArcPolicy),
}

/// One vertex together with its neighbours in the cycle.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CornerSpec {
    pub index: usize,
    pub prev: Point,
    pub at: Point,
    pub next: Point,
    pub radius: f64,
}

/// Curve between the entry and exit points of a corner.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Through {
    Quad { control: Point },
    Arc { radius: f64, flags: ArcFlags },
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Corner {
    pub entry: Point,
    pub through: Through,
    pub exit: Point,
}

/// Corner radius for a regular arrangement with the given side length.
///
/// The side is halved before the percentage applies, so the two corners
/// sharing a side never claim more than all of it.
pub fn corner_radius(side_length: f64, round_percent: f64) -> f64 {
    side_length * (round_percent / 200.0)
}

fn offsets(spec: &CornerSpec) -> Result<(Point, Point)> {
    let degenerate = || ShapeError::DegenerateGeometry { index: spec.index };
    let back = unit_toward(spec.at, spec.prev).ok_or_else(degenerate)?;
    let ahead = unit_toward(spec.at, spec.next).ok_or_else(degenerate)?;
    Ok((
        round_point(spec.at + back * spec.radius),
        round_point(spec.at + ahead * spec.radius),
    ))
}

/// Rounded corner with the vertex itself as quadratic control point.
/// A zero radius leaves entry, control and exit all on the vertex.
pub fn quadratic(spec: &CornerSpec) -> Result<Corner> {
    let (entry, exit) = offsets(spec)?;
    Ok(Corner { entry, through: Through::Quad { control: round_point(spec.at) }, exit })
}

/// Rounded corner drawn as a circular arc of the corner radius.
pub fn arc(spec: &CornerSpec, flags: ArcFlags) -> Result<Corner> {
    let (entry, exit) = offsets(spec)?;
    Ok(Corner { entry, through: Through::Arc { radius: round2(spec.radius), flags }, exit })
}

impl CornerStyle {
    pub fn apply(&self, spec: &CornerSpec) -> Result<Corner> {
        match self {
            CornerStyle::Quadratic => quadratic(spec),
            CornerStyle::Arc(policy) => arc(spec, policy.flags_at(spec.index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_corner(radius: f64) -> CornerSpec {
        CornerSpec {
            index: 0,
            prev: Point::new(0.0, 100.0),
            at: Point::new(0.0, 0.0),
            next: Point::new(100.0, 0.0),
            radius,
        }
    }

    #[test]
    fn quadratic_offsets_along_both_sides() {
        let corner = quadratic(&square_corner(10.0)).unwrap();
        assert_eq!(corner.entry, Point::new(0.0, 10.0));
        assert_eq!(corner.exit, Point::new(10.0, 0.0));
        assert_eq!(corner.through, Through::Quad { control: Point::new(0.0, 0.0) });
    }

    #[test]
    fn zero_radius_collapses_to_sharp_corner() {
        let corner = quadratic(&square_corner(0.0)).unwrap();
        let vertex = Point::new(0.0, 0.0);
        assert_eq!(corner.entry, vertex);
        assert_eq!(corner.exit, vertex);
        assert_eq!(corner.through, Through::Quad { control: vertex });
    }

    #[test]
    fn arc_keeps_flags_and_radius() {
        let corner = arc(&square_corner(12.3456), ArcFlags::CONCAVE).unwrap();
        assert_eq!(corner.entry, Point::new(0.0, 12.35));
        assert_eq!(corner.exit, Point::new(12.35, 0.0));
        assert_eq!(corner.through, Through::Arc { radius: 12.35, flags: ArcFlags::CONCAVE });
    }

    #[test]
    fn coincident_neighbour_reports_vertex_index() {
        let spec = CornerSpec { index: 7, next: Point::new(0.0, 0.0), ..square_corner(5.0) };
        match quadratic(&spec) {
            Err(ShapeError::DegenerateGeometry { index }) => assert_eq!(index, 7),
            other => panic!("expected degenerate geometry, got {:?}", other),
        }
    }

    #[test]
    fn alternating_policy_follows_parity() {
        let policy = ArcPolicy::Alternating { even: ArcFlags::CONVEX, odd: ArcFlags::CONCAVE };
        assert_eq!(policy.flags_at(0), ArcFlags::CONVEX);
        assert_eq!(policy.flags_at(1), ArcFlags::CONCAVE);
        assert_eq!(policy.flags_at(4), ArcFlags::CONVEX);

        let style = CornerStyle::Arc(policy);
        let spec = CornerSpec { index: 3, ..square_corner(1.0) };
        match style.apply(&spec).unwrap().through {
            Through::Arc { flags, .. } => assert_eq!(flags, ArcFlags::CONCAVE),
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn radius_rule_halves_the_side() {
        assert_eq!(corner_radius(200.0, 100.0), 100.0);
        assert_eq!(corner_radius(200.0, 50.0), 50.0);
        assert_eq!(corner_radius(200.0, 0.0), 0.0);
    }
}
