use serde::{Serialize, Deserialize};
use kurbo::Point;

pub const DEFAULT_CANVAS_SIZE: f64 = 1000.0;

/// Fixed drawing surface every shape is laid out on.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(from = "CanvasSize", into = "CanvasSize")]
pub struct Canvas {
    width: f64,
    height: f64,
    center: Point,
    radius: f64, // inscribed radius
}

#[derive(Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
struct CanvasSize {
    width: f64,
    height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        CanvasSize { width: DEFAULT_CANVAS_SIZE, height: DEFAULT_CANVAS_SIZE }
    }
}

impl From<CanvasSize> for Canvas {
    fn from(size: CanvasSize) -> Self {
        Canvas::new(size.width, size.height)
    }
}

impl From<Canvas> for CanvasSize {
    fn from(canvas: Canvas) -> Self {
        CanvasSize { width: canvas.width, height: canvas.height }
    }
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Canvas {
        Canvas {
            width,
            height,
            center: Point::new(width / 2.0, height / 2.0),
            radius: width.min(height) / 2.0,
        }
    }

    pub fn width(&self) -> f64 { self.width }
    pub fn height(&self) -> f64 { self.height }
    pub fn center(&self) -> Point { self.center }
    pub fn radius(&self) -> f64 { self.radius }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new(DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE)
    }
}

/// Per-family numeric configuration. Missing values fall back to the
/// family's defaults; present values are repaired, never rejected.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
#[serde(default)]
pub struct ShapeParameters {
    pub count: Option<i64>,
    pub wave: Option<f64>,     // star depth, percent of r
    pub round: Option<f64>,    // percent of half the side length
    pub ratio: Option<f64>,    // ellipse flattening, percent of r
    pub rotation: Option<f64>, // degrees
}

impl ShapeParameters {
    pub fn with_count(count: i64) -> ShapeParameters {
        ShapeParameters { count: Some(count), ..Default::default() }
    }

    pub fn count_or(&self, default: i64) -> i64 { self.count.unwrap_or(default) }
    pub fn wave_or(&self, default: f64) -> f64 { self.wave.unwrap_or(default) }
    pub fn round_or(&self, default: f64) -> f64 { self.round.unwrap_or(default) }
    pub fn ratio_or(&self, default: f64) -> f64 { self.ratio.unwrap_or(default) }
    pub fn rotation_or(&self, default: f64) -> f64 { self.rotation.unwrap_or(default) }
}
