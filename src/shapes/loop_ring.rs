use super::*;
use log::debug;
use crate::geometry::round2;
use crate::layout::TangentRing;

pub const MIN_COUNT: i64 = 2;
pub const DEFAULT_COUNT: i64 = 3;

pub fn metadata() -> ShapeMetadata {
    ShapeMetadata {
        id: "loop".to_string(),
        name: "Loop".to_string(),
        parameters: vec![
            ShapeParameter::count(MIN_COUNT, DEFAULT_COUNT),
            ShapeParameter::rotation(0.0),
        ],
    }
}

/// Ring of mutually tangent circles inside the canvas. Pure placement: the
/// result is a set of circles, not a path.
pub fn generate(canvas: &Canvas, params: &ShapeParameters) -> Result<Descriptor> {
    let count = at_least(params.count_or(DEFAULT_COUNT), MIN_COUNT);
    let ring = TangentRing::new(canvas, count);
    ensure_spacing(2.0 * ring.small_radius)?;
    let radius = round2(ring.small_radius);
    debug!("loop: {} circles of radius {}", count, radius);

    let circles = ring
        .centers(canvas, count, rotation_offset(params))
        .points()
        .iter()
        .map(|&center| Circle { center, radius })
        .collect();
    Ok(Descriptor::Circles(circles))
}
