use super::*;
use log::debug;
use crate::corners::{ArcFlags, ArcPolicy, CornerStyle};
use crate::layout;
use crate::path;

pub const MIN_COUNT: i64 = 1;
pub const DEFAULT_COUNT: i64 = 3;
pub const LOBE: ArcPolicy = ArcPolicy::Uniform(ArcFlags::CONVEX);
pub const ROUNDED_CORNER: ArcPolicy = ArcPolicy::Uniform(ArcFlags::QUARTER);

pub fn metadata() -> ShapeMetadata {
    ShapeMetadata {
        id: "biscuit".to_string(),
        name: "Biscuit".to_string(),
        parameters: vec![ShapeParameter::count(MIN_COUNT, DEFAULT_COUNT)],
    }
}

/// Scalloped square with `count` round lobes along each edge.
///
/// The scallops run along the largest square centered on the canvas. A
/// single lobe has no perimeter to walk, so it becomes that square rounded
/// off by four quarter arcs of half its side.
pub fn generate(canvas: &Canvas, params: &ShapeParameters) -> Result<Descriptor> {
    let count = at_least(params.count_or(DEFAULT_COUNT), MIN_COUNT);
    let (_, side) = layout::inscribed_square(canvas);
    ensure_spacing(side / count as f64)?;

    let d = if count == 1 {
        let radius = side / 2.0;
        debug!("biscuit: single lobe, corner radius {}", radius);
        path::assemble(&layout::square_corners(canvas), CornerStyle::Arc(ROUNDED_CORNER), radius)?
    } else {
        let (cycle, radius) = layout::perimeter(canvas, count);
        debug!("biscuit: {} lobes per edge, radius {}", count, radius);
        path::assemble(&cycle, CornerStyle::Arc(LOBE), radius)?
    };
    Ok(Descriptor::Path(d))
}
