use super::*;
use log::debug;
use crate::corners::{ArcFlags, ArcPolicy, CornerStyle};
use crate::layout::TangentRing;
use crate::path;

pub const MIN_COUNT: i64 = 2;
pub const DEFAULT_COUNT: i64 = 2;
pub const LOBES: ArcPolicy = ArcPolicy::Alternating { even: ArcFlags::CONVEX, odd: ArcFlags::CONCAVE };

pub fn metadata() -> ShapeMetadata {
    ShapeMetadata {
        id: "virus".to_string(),
        name: "Virus".to_string(),
        parameters: vec![
            ShapeParameter::count(MIN_COUNT, DEFAULT_COUNT),
            ShapeParameter::rotation(0.0),
        ],
    }
}

/// Tangent-circle ring of `2 * count` lobes alternating between outward
/// bulges and inward scoops.
pub fn generate(canvas: &Canvas, params: &ShapeParameters) -> Result<Descriptor> {
    let count = doubled(at_least(params.count_or(DEFAULT_COUNT), MIN_COUNT))?;
    let ring = TangentRing::new(canvas, count);
    ensure_spacing(2.0 * ring.small_radius)?;
    let cycle = ring.centers(canvas, count, rotation_offset(params));
    debug!("virus: {} lobes of radius {}", count, ring.small_radius);

    Ok(Descriptor::Path(path::assemble(&cycle, CornerStyle::Arc(LOBES), ring.small_radius)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lobes_alternate() {
        let d = generate(&Canvas::default(), &ShapeParameters::with_count(2)).unwrap();
        let d = d.as_path().unwrap();
        let flags: Vec<&str> = d
            .split(" A ")
            .skip(1)
            .map(|segment| {
                let mut tokens = segment.split(' ');
                tokens.nth(2).unwrap()
            })
            .collect();
        assert_eq!(flags, ["1", "0", "1", "0"]);
        assert!(d.contains(" A 207.11,207.11 "));
    }

    #[test]
    fn count_is_doubled_after_repair() {
        let d = generate(&Canvas::default(), &ShapeParameters::with_count(1)).unwrap();
        assert_eq!(d.as_path().unwrap().matches(" A ").count(), 4);
    }
}
