use serde::{Serialize, Deserialize};
use kurbo::Point;
use std::fmt;
use std::str::FromStr;
use crate::error::{Result, ShapeError};
use crate::geometry::clamp_loop;
use crate::types::{Canvas, ShapeParameters};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShapeParameter {
    pub name: String,
    pub key: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl ShapeParameter {
    fn new(name: &str, key: &str, min: f64, max: f64, default: f64, step: f64) -> ShapeParameter {
        ShapeParameter { name: name.to_string(), key: key.to_string(), min, max, default, step }
    }

    pub(crate) fn count(min: i64, default: i64) -> ShapeParameter {
        ShapeParameter::new("Count", "count", min as f64, 100.0, default as f64, 1.0)
    }

    pub(crate) fn percent(name: &str, key: &str, default: f64) -> ShapeParameter {
        ShapeParameter::new(name, key, 0.0, 100.0, default, 1.0)
    }

    pub(crate) fn rotation(default: f64) -> ShapeParameter {
        ShapeParameter::new("Rotation", "rotation", 0.0, 360.0, default, 1.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShapeMetadata {
    pub id: String,
    pub name: String,
    pub parameters: Vec<ShapeParameter>,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ellipse {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    pub rotation: f64, // degrees
}

/// Finished geometry for one shape, ready for a renderer.
#[derive(Clone, PartialEq, Debug)]
pub enum Descriptor {
    Path(String),
    Circle(Circle),
    Circles(Vec<Circle>),
    Ellipse(Ellipse),
}

impl Descriptor {
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Descriptor::Path(d) => Some(d),
            _ => None,
        }
    }
}

pub mod circle;
pub mod ellipse;
pub mod polygon;
pub mod star;
pub mod loop_ring;
pub mod flower;
pub mod thorn;
pub mod virus;
pub mod biscuit;

/// Raise a count below the family minimum to that minimum.
pub(crate) fn at_least(count: i64, min: i64) -> usize {
    usize::try_from(count.max(min)).unwrap_or(usize::MAX)
}

/// Neighbouring vertices closer than this coincide once rounded.
pub(crate) const MIN_SPACING: f64 = 0.01;

/// Fail before any vertex is placed when neighbours `spacing` apart would
/// collapse onto each other under two-decimal rounding.
pub(crate) fn ensure_spacing(spacing: f64) -> Result<()> {
    if spacing >= MIN_SPACING {
        Ok(())
    } else {
        Err(ShapeError::DegenerateGeometry { index: 0 })
    }
}

/// Twice `count`, or degenerate geometry when that no longer fits.
pub(crate) fn doubled(count: usize) -> Result<usize> {
    count.checked_mul(2).ok_or(ShapeError::DegenerateGeometry { index: 0 })
}

/// Extra start angle, in radians, from the wrapped `rotation` degrees.
pub(crate) fn rotation_offset(params: &ShapeParameters) -> f64 {
    clamp_loop(params.rotation_or(0.0), 0.0, 360.0).to_radians()
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Ellipse,
    Polygon,
    Star,
    Loop,
    Flower,
    Thorn,
    Virus,
    Biscuit,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Polygon,
        ShapeKind::Star,
        ShapeKind::Loop,
        ShapeKind::Flower,
        ShapeKind::Thorn,
        ShapeKind::Virus,
        ShapeKind::Biscuit,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Star => "star",
            ShapeKind::Loop => "loop",
            ShapeKind::Flower => "flower",
            ShapeKind::Thorn => "thorn",
            ShapeKind::Virus => "virus",
            ShapeKind::Biscuit => "biscuit",
        }
    }

    pub fn metadata(&self) -> ShapeMetadata {
        match self {
            ShapeKind::Circle => circle::metadata(),
            ShapeKind::Ellipse => ellipse::metadata(),
            ShapeKind::Polygon => polygon::metadata(),
            ShapeKind::Star => star::metadata(),
            ShapeKind::Loop => loop_ring::metadata(),
            ShapeKind::Flower => flower::metadata(),
            ShapeKind::Thorn => thorn::metadata(),
            ShapeKind::Virus => virus::metadata(),
            ShapeKind::Biscuit => biscuit::metadata(),
        }
    }

    pub fn generate(&self, canvas: &Canvas, params: &ShapeParameters) -> Result<Descriptor> {
        match self {
            ShapeKind::Circle => Ok(circle::generate(canvas)),
            ShapeKind::Ellipse => Ok(ellipse::generate(canvas, params)),
            ShapeKind::Polygon => polygon::generate(canvas, params),
            ShapeKind::Star => star::generate(canvas, params),
            ShapeKind::Loop => loop_ring::generate(canvas, params),
            ShapeKind::Flower => flower::generate(canvas, params),
            ShapeKind::Thorn => thorn::generate(canvas, params),
            ShapeKind::Virus => virus::generate(canvas, params),
            ShapeKind::Biscuit => biscuit::generate(canvas, params),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<ShapeKind> {
        ShapeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| ShapeError::UnknownShape(s.to_string()))
    }
}

pub fn catalog() -> Vec<ShapeMetadata> {
    ShapeKind::ALL.iter().map(ShapeKind::metadata).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.id().parse::<ShapeKind>().unwrap(), kind);
            assert_eq!(kind.metadata().id, kind.id());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        match "hexagon".parse::<ShapeKind>() {
            Err(ShapeError::UnknownShape(name)) => assert_eq!(name, "hexagon"),
            other => panic!("expected unknown shape, got {:?}", other),
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&ShapeKind::Loop).unwrap(), "\"loop\"");
        let kind: ShapeKind = serde_json::from_str("\"biscuit\"").unwrap();
        assert_eq!(kind, ShapeKind::Biscuit);
    }

    #[test]
    fn catalog_lists_every_family() {
        let catalog = catalog();
        assert_eq!(catalog.len(), ShapeKind::ALL.len());
        let star = catalog.iter().find(|m| m.id == "star").unwrap();
        let keys: Vec<&str> = star.parameters.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["count", "wave", "round", "rotation"]);
    }

    #[test]
    fn counts_are_raised_not_rejected() {
        assert_eq!(at_least(-4, 3), 3);
        assert_eq!(at_least(2, 3), 3);
        assert_eq!(at_least(7, 3), 7);
        assert_eq!(at_least(i64::MAX, 3) as u64, (i64::MAX as u64).min(usize::MAX as u64));
    }

    #[test]
    fn spacing_below_rounding_grid_is_degenerate() {
        assert!(ensure_spacing(0.01).is_ok());
        assert!(ensure_spacing(250.0).is_ok());
        for spacing in [0.009, 0.0, f64::NAN] {
            match ensure_spacing(spacing) {
                Err(ShapeError::DegenerateGeometry { index }) => assert_eq!(index, 0),
                other => panic!("expected degenerate geometry, got {:?}", other),
            }
        }
    }

    #[test]
    fn doubling_never_overflows() {
        assert_eq!(doubled(3).unwrap(), 6);
        assert!(matches!(doubled(usize::MAX), Err(ShapeError::DegenerateGeometry { .. })));
    }

    #[test]
    fn rotation_wraps_before_conversion() {
        let params = ShapeParameters { rotation: Some(450.0), ..Default::default() };
        assert!((rotation_offset(&params) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(rotation_offset(&ShapeParameters::default()), 0.0);
    }
}
