//! Canvas renderer: turns finished geometry into SVG markup.

use crate::shapes::{Circle, Descriptor, Ellipse};

/// Formats primitives and wraps them into a document. Geometry never
/// formats tags itself.
pub trait Renderer {
    fn wrap(&self, width: f64, height: f64, inner: &str) -> String;
    fn circle(&self, cx: f64, cy: f64, r: f64) -> String;
    fn ellipse(&self, cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64) -> String;
    fn path(&self, d: &str) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SvgRenderer;

impl Renderer for SvgRenderer {
    fn wrap(&self, width: f64, height: f64, inner: &str) -> String {
        format!(
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">{}</svg>"#,
            width, height, inner
        )
    }

    fn circle(&self, cx: f64, cy: f64, r: f64) -> String {
        format!(r#"<circle cx="{}" cy="{}" r="{}"/>"#, cx, cy, r)
    }

    fn ellipse(&self, cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64) -> String {
        format!(
            r#"<ellipse cx="{cx}" cy="{cy}" rx="{rx}" ry="{ry}" transform="rotate({deg}, {cx}, {cy})"/>"#,
            cx = cx, cy = cy, rx = rx, ry = ry, deg = rotation
        )
    }

    fn path(&self, d: &str) -> String {
        format!(r#"<path d="{}"/>"#, d)
    }
}

impl Descriptor {
    /// Inner markup for this descriptor.
    pub fn render(&self, renderer: &dyn Renderer) -> String {
        let circle = |c: &Circle| renderer.circle(c.center.x, c.center.y, c.radius);
        match self {
            Descriptor::Path(d) => renderer.path(d),
            Descriptor::Circle(c) => circle(c),
            Descriptor::Circles(circles) => circles.iter().map(circle).collect(),
            Descriptor::Ellipse(Ellipse { center, rx, ry, rotation }) => {
                renderer.ellipse(center.x, center.y, *rx, *ry, *rotation)
            }
        }
    }

    /// Complete document at the given canvas size.
    pub fn to_document(&self, renderer: &dyn Renderer, width: f64, height: f64) -> String {
        renderer.wrap(width, height, &self.render(renderer))
    }
}
