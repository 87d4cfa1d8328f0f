use super::*;
use log::debug;
use crate::corners::{corner_radius, CornerStyle};
use crate::geometry::chord;
use crate::layout;
use crate::path;

pub const MIN_COUNT: i64 = 2;
pub const DEFAULT_COUNT: i64 = 3;
pub const DEFAULT_WAVE: f64 = 60.0;
pub const DEFAULT_ROUND: f64 = 0.0;

pub fn metadata() -> ShapeMetadata {
    ShapeMetadata {
        id: "star".to_string(),
        name: "Star".to_string(),
        parameters: vec![
            ShapeParameter::count(MIN_COUNT, DEFAULT_COUNT),
            ShapeParameter::percent("Wave", "wave", DEFAULT_WAVE),
            ShapeParameter::percent("Roundness", "round", DEFAULT_ROUND),
            ShapeParameter::rotation(0.0),
        ],
    }
}

/// Star with `count` points. Inner vertices sit `wave` percent of the
/// radius closer to the center; a wave of 100 pulls them onto it.
pub fn generate(canvas: &Canvas, params: &ShapeParameters) -> Result<Descriptor> {
    let count = at_least(params.count_or(DEFAULT_COUNT), MIN_COUNT);
    let r = canvas.radius();
    let wave = r * (clamp_loop(params.wave_or(DEFAULT_WAVE), 0.0, 100.0) / 100.0);
    let round = clamp_loop(params.round_or(DEFAULT_ROUND), 0.0, 100.0);

    // spacing and rounding are sized from the regular 2n-gon, not the
    // actual star side
    let side = chord(r, doubled(count)?);
    ensure_spacing(side)?;
    let corner = corner_radius(side, round);
    let cycle = layout::star(canvas, count, r, r - wave, rotation_offset(params));
    debug!("star: {} points, inner radius {}, corner radius {}", count, r - wave, corner);

    Ok(Descriptor::Path(path::assemble(&cycle, CornerStyle::Quadratic, corner)?))
}
