use super::*;
use log::debug;
use crate::corners::{corner_radius, CornerStyle};
use crate::geometry::chord;
use crate::layout;
use crate::path;

pub const MIN_COUNT: i64 = 3;
pub const DEFAULT_COUNT: i64 = 3;
pub const DEFAULT_ROUND: f64 = 0.0;

pub fn metadata() -> ShapeMetadata {
    ShapeMetadata {
        id: "polygon".to_string(),
        name: "Polygon".to_string(),
        parameters: vec![
            ShapeParameter::count(MIN_COUNT, DEFAULT_COUNT),
            ShapeParameter::percent("Roundness", "round", DEFAULT_ROUND),
            ShapeParameter::rotation(0.0),
        ],
    }
}

/// Regular polygon inscribed in the canvas with quadratic-rounded corners.
pub fn generate(canvas: &Canvas, params: &ShapeParameters) -> Result<Descriptor> {
    let count = at_least(params.count_or(DEFAULT_COUNT), MIN_COUNT);
    let round = clamp_loop(params.round_or(DEFAULT_ROUND), 0.0, 100.0);
    let r = canvas.radius();

    let side = chord(r, count);
    ensure_spacing(side)?;
    let corner = corner_radius(side, round);
    let cycle = layout::regular(canvas, count, r, rotation_offset(params));
    debug!("polygon: {} sides, corner radius {}", count, corner);

    Ok(Descriptor::Path(path::assemble(&cycle, CornerStyle::Quadratic, corner)?))
}
