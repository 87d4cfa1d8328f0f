use wasm_bindgen::prelude::*;
use log::warn;
use crate::error::{Result, ShapeError};
use crate::shapes::{Descriptor, ShapeKind};
use crate::svg::{Renderer, SvgRenderer};
use crate::types::{Canvas, ShapeParameters};

/// Shape generator bound to one canvas. Holds no other state, so every
/// call is a pure function of its arguments.
#[wasm_bindgen]
pub struct ShapeEngine {
    pub(crate) canvas: Canvas,
    pub(crate) renderer: SvgRenderer,
}

fn to_js(err: ShapeError) -> JsValue {
    warn!("shape generation failed: {}", err);
    JsValue::from_str(&err.to_string())
}

impl ShapeEngine {
    pub fn with_canvas(canvas: Canvas) -> ShapeEngine {
        ShapeEngine { canvas, renderer: SvgRenderer }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn descriptor(&self, kind: ShapeKind, params: &ShapeParameters) -> Result<Descriptor> {
        kind.generate(&self.canvas, params)
    }

    /// Full SVG document for one shape.
    pub fn document(&self, kind: ShapeKind, params: &ShapeParameters) -> Result<String> {
        let descriptor = self.descriptor(kind, params)?;
        Ok(self.wrap(&descriptor))
    }

    pub(crate) fn wrap(&self, descriptor: &Descriptor) -> String {
        descriptor.to_document(&self.renderer as &dyn Renderer, self.canvas.width(), self.canvas.height())
    }

    fn typed(&self, kind: ShapeKind, params: ShapeParameters) -> std::result::Result<String, JsValue> {
        self.document(kind, &params).map_err(to_js)
    }
}

impl Default for ShapeEngine {
    fn default() -> Self {
        ShapeEngine::with_canvas(Canvas::default())
    }
}

#[wasm_bindgen]
impl ShapeEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> ShapeEngine {
        console_error_panic_hook::set_once();
        ShapeEngine::with_canvas(Canvas::new(width, height))
    }

    pub fn circle(&self) -> String {
        self.wrap(&crate::shapes::circle::generate(&self.canvas))
    }

    pub fn ellipse(&self, ratio: f64, rotation: f64) -> String {
        let params = ShapeParameters { ratio: Some(ratio), rotation: Some(rotation), ..Default::default() };
        self.wrap(&crate::shapes::ellipse::generate(&self.canvas, &params))
    }

    pub fn polygon(&self, count: i32, round: f64) -> std::result::Result<String, JsValue> {
        let params = ShapeParameters { count: Some(count.into()), round: Some(round), ..Default::default() };
        self.typed(ShapeKind::Polygon, params)
    }

    pub fn star(&self, count: i32, wave: f64, round: f64) -> std::result::Result<String, JsValue> {
        let params = ShapeParameters {
            count: Some(count.into()),
            wave: Some(wave),
            round: Some(round),
            ..Default::default()
        };
        self.typed(ShapeKind::Star, params)
    }

    #[wasm_bindgen(js_name = "loop")]
    pub fn loop_ring(&self, count: i32) -> std::result::Result<String, JsValue> {
        self.typed(ShapeKind::Loop, ShapeParameters::with_count(count.into()))
    }

    pub fn flower(&self, count: i32) -> std::result::Result<String, JsValue> {
        self.typed(ShapeKind::Flower, ShapeParameters::with_count(count.into()))
    }

    pub fn thorn(&self, count: i32) -> std::result::Result<String, JsValue> {
        self.typed(ShapeKind::Thorn, ShapeParameters::with_count(count.into()))
    }

    pub fn virus(&self, count: i32) -> std::result::Result<String, JsValue> {
        self.typed(ShapeKind::Virus, ShapeParameters::with_count(count.into()))
    }

    pub fn biscuit(&self, count: i32) -> std::result::Result<String, JsValue> {
        self.typed(ShapeKind::Biscuit, ShapeParameters::with_count(count.into()))
    }

    pub fn shape_catalog(&self) -> String {
        serde_json::to_string(&crate::shapes::catalog()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn get_canvas(&self) -> String {
        serde_json::to_string(&self.canvas).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_document_matches_canvas() {
        let engine = ShapeEngine::default();
        assert_eq!(
            engine.circle(),
            r#"<svg viewBox="0 0 1000 1000" xmlns="http://www.w3.org/2000/svg"><circle cx="500" cy="500" r="500"/></svg>"#
        );
    }

    #[test]
    fn typed_methods_agree_with_dispatch() {
        let engine = ShapeEngine::default();
        let params = ShapeParameters { count: Some(5), wave: Some(40.0), round: Some(20.0), ..Default::default() };
        assert_eq!(engine.star(5, 40.0, 20.0).unwrap(), engine.document(ShapeKind::Star, &params).unwrap());
        assert_eq!(engine.loop_ring(4).unwrap(), engine.document(ShapeKind::Loop, &ShapeParameters::with_count(4)).unwrap());
    }

    #[test]
    fn ellipse_applies_rotation() {
        let doc = ShapeEngine::default().ellipse(40.0, 45.0);
        assert!(doc.contains(r#"rx="300" ry="500" transform="rotate(45, 500, 500)""#), "{}", doc);
    }

    #[test]
    fn canvas_and_catalog_serialize() {
        let engine = ShapeEngine::with_canvas(Canvas::new(200.0, 100.0));
        assert_eq!(engine.get_canvas(), r#"{"width":200.0,"height":100.0}"#);
        let catalog: serde_json::Value = serde_json::from_str(&engine.shape_catalog()).unwrap();
        assert_eq!(catalog.as_array().map(Vec::len), Some(ShapeKind::ALL.len()));
    }
}
