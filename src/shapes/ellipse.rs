use super::*;
use crate::geometry::{round2, round_point};

pub const DEFAULT_RATIO: f64 = 40.0;
pub const DEFAULT_ROTATION: f64 = 90.0;

pub fn metadata() -> ShapeMetadata {
    ShapeMetadata {
        id: "ellipse".to_string(),
        name: "Ellipse".to_string(),
        parameters: vec![
            ShapeParameter::percent("Flatten", "ratio", DEFAULT_RATIO),
            ShapeParameter::rotation(DEFAULT_ROTATION),
        ],
    }
}

/// Ellipse whose horizontal radius shrinks by `ratio` percent of the
/// inscribed radius, turned by `rotation` degrees about the canvas center.
pub fn generate(canvas: &Canvas, params: &ShapeParameters) -> Descriptor {
    let r = canvas.radius();
    let ratio = clamp_loop(params.ratio_or(DEFAULT_RATIO), 0.0, 100.0);
    let rotation = clamp_loop(params.rotation_or(DEFAULT_ROTATION), 0.0, 360.0);

    Descriptor::Ellipse(Ellipse {
        center: round_point(canvas.center()),
        rx: round2(r * (100.0 - ratio) / 100.0),
        ry: round2(r),
        rotation: round2(rotation),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ellipse_of(params: &ShapeParameters) -> Ellipse {
        match generate(&Canvas::default(), params) {
            Descriptor::Ellipse(e) => e,
            other => panic!("expected ellipse, got {:?}", other),
        }
    }

    #[test]
    fn defaults_flatten_and_turn() {
        let e = ellipse_of(&ShapeParameters::default());
        assert_eq!(e.rx, 300.0);
        assert_eq!(e.ry, 500.0);
        assert_eq!(e.rotation, 90.0);
    }

    #[test]
    fn parameters_wrap() {
        let params = ShapeParameters { ratio: Some(110.0), rotation: Some(-90.0), ..Default::default() };
        let e = ellipse_of(&params);
        assert_eq!(e.rx, 450.0);
        assert_eq!(e.rotation, 270.0);
    }

    #[test]
    fn fractional_values_are_rounded() {
        let params = ShapeParameters { rotation: Some(370.123), ..Default::default() };
        assert_eq!(ellipse_of(&params).rotation, 10.12);

        let side = 1000.0 / 3.0;
        match generate(&Canvas::new(side, side), &ShapeParameters::default()) {
            Descriptor::Ellipse(e) => {
                assert_eq!(e.center, Point::new(166.67, 166.67));
                assert_eq!(e.ry, 166.67);
                assert_eq!(e.rx, 100.0);
            }
            other => panic!("expected ellipse, got {:?}", other),
        }
    }
}
