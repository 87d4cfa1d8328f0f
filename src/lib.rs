pub mod error;
pub mod types;
pub mod geometry;
pub mod corners;
pub mod layout;
pub mod path;
pub mod shapes;
pub mod svg;
pub mod engine;
pub mod commands;

pub use engine::ShapeEngine;
pub use error::{Result, ShapeError};
pub use shapes::{Descriptor, ShapeKind};
pub use svg::{Renderer, SvgRenderer};
pub use types::*;
