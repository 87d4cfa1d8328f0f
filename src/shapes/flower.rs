use super::*;
use log::debug;
use crate::corners::{ArcFlags, ArcPolicy, CornerStyle};
use crate::layout::TangentRing;
use crate::path;

pub const MIN_COUNT: i64 = 3;
pub const DEFAULT_COUNT: i64 = 3;
pub const PETAL: ArcPolicy = ArcPolicy::Uniform(ArcFlags::CONVEX);

pub fn metadata() -> ShapeMetadata {
    ShapeMetadata {
        id: "flower".to_string(),
        name: "Flower".to_string(),
        parameters: vec![
            ShapeParameter::count(MIN_COUNT, DEFAULT_COUNT),
            ShapeParameter::rotation(0.0),
        ],
    }
}

/// Outline of the tangent-circle ring: each circle contributes its outer
/// arc between the two points where it touches its neighbours.
pub fn generate(canvas: &Canvas, params: &ShapeParameters) -> Result<Descriptor> {
    let count = at_least(params.count_or(DEFAULT_COUNT), MIN_COUNT);
    let ring = TangentRing::new(canvas, count);
    ensure_spacing(2.0 * ring.small_radius)?;
    let cycle = ring.centers(canvas, count, rotation_offset(params));
    debug!("flower: {} petals of radius {}", count, ring.small_radius);

    Ok(Descriptor::Path(path::assemble(&cycle, CornerStyle::Arc(PETAL), ring.small_radius)?))
}
