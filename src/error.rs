use thiserror::Error;

/// Failures surfaced while generating a shape.
///
/// Out-of-range counts and percentages are never errors: counts are
/// raised to the family minimum and percentages wrap into their range.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("vertex {index} coincides with a neighbour; side length is zero")]
    DegenerateGeometry { index: usize },
    #[error("unknown shape \"{0}\"")]
    UnknownShape(String),
    #[error("invalid command: {0}")]
    InvalidCommand(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShapeError>;
