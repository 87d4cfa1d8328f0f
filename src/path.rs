//! Walks a vertex cycle and emits one closed path.

use kurbo::Point;
use crate::corners::{Corner, CornerStyle, Through};
use crate::error::Result;
use crate::layout::VertexCycle;

fn coords(p: Point) -> String {
    format!("{},{}", p.x, p.y)
}

fn flag(set: bool) -> u8 {
    if set { 1 } else { 0 }
}

fn corner_tokens(corner: &Corner) -> String {
    match corner.through {
        Through::Quad { control } => format!(
            "{} Q {} {}",
            coords(corner.entry), coords(control), coords(corner.exit)
        ),
        Through::Arc { radius, flags } => format!(
            "{} A {},{} 0 {} {} {}",
            coords(corner.entry), radius, radius,
            flag(flags.large_arc), flag(flags.sweep), coords(corner.exit)
        ),
    }
}

/// Closed path through every vertex of `cycle`, each vertex replaced by a
/// corner of the same `radius`.
pub fn assemble(cycle: &VertexCycle, style: CornerStyle, radius: f64) -> Result<String> {
    assemble_with(cycle, style, |_| radius)
}

/// Like [`assemble`], with the corner radius chosen per vertex index.
///
/// The first corner opens with a move, every later one with a line to its
/// entry point, and the path always ends with `z`.
pub fn assemble_with<F>(cycle: &VertexCycle, style: CornerStyle, radius_at: F) -> Result<String>
where
    F: Fn(usize) -> f64,
{
    let mut path = String::new();
    for i in 0..cycle.len() {
        let corner = style.apply(&cycle.corner(i, radius_at(i)))?;
        let command = if i == 0 { "M" } else { "L" };
        path.push_str(&format!("{} {} ", command, corner_tokens(&corner)));
    }
    path.push('z');
    Ok(path)
}
