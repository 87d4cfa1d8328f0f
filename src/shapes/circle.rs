use super::*;
use crate::geometry::{round2, round_point};

pub fn metadata() -> ShapeMetadata {
    ShapeMetadata {
        id: "circle".to_string(),
        name: "Circle".to_string(),
        parameters: Vec::new(),
    }
}

/// The canvas' inscribed circle.
pub fn generate(canvas: &Canvas) -> Descriptor {
    Descriptor::Circle(Circle {
        center: round_point(canvas.center()),
        radius: round2(canvas.radius()),
    })
}
