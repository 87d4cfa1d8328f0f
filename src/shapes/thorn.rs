use super::*;
use log::debug;
use std::f64::consts::FRAC_PI_4;
use crate::corners::{corner_radius, ArcFlags, ArcPolicy, CornerStyle};
use crate::geometry::chord;
use crate::layout;
use crate::path;

pub const MIN_COUNT: i64 = 3;
pub const DEFAULT_COUNT: i64 = 3;
pub const SCOOP: ArcPolicy = ArcPolicy::Uniform(ArcFlags::CONCAVE);
const ROUND: f64 = 100.0;

pub fn metadata() -> ShapeMetadata {
    ShapeMetadata {
        id: "thorn".to_string(),
        name: "Thorn".to_string(),
        parameters: vec![
            ShapeParameter::count(MIN_COUNT, DEFAULT_COUNT),
            ShapeParameter::rotation(0.0),
        ],
    }
}

/// Polygon turned by 45° whose corners are scooped out by concave arcs
/// running between side midpoints, leaving sharp spikes at the midpoints.
pub fn generate(canvas: &Canvas, params: &ShapeParameters) -> Result<Descriptor> {
    let count = at_least(params.count_or(DEFAULT_COUNT), MIN_COUNT);
    let r = canvas.radius();

    let side = chord(r, count);
    ensure_spacing(side)?;
    let corner = corner_radius(side, ROUND);
    let cycle = layout::regular(canvas, count, r, FRAC_PI_4 + rotation_offset(params));
    debug!("thorn: {} spikes, arc radius {}", count, corner);

    Ok(Descriptor::Path(path::assemble(&cycle, CornerStyle::Arc(SCOOP), corner)?))
}
