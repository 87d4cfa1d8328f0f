use wasm_bindgen::prelude::*;
use serde::Deserialize;
use log::{debug, warn};
use crate::engine::ShapeEngine;
use crate::error::Result;
use crate::shapes::ShapeKind;
use crate::types::ShapeParameters;

/// `{"shape": "star", "params": {"count": 5, "wave": 40}}`
#[derive(Deserialize, Debug)]
pub struct ShapeCommand {
    pub shape: String,
    #[serde(default)]
    pub params: ShapeParameters,
}

impl ShapeEngine {
    /// Parse and run one command, returning the SVG document.
    pub fn run_command(&self, cmd_json: &str) -> Result<String> {
        let cmd: ShapeCommand = serde_json::from_str(cmd_json)?;
        let kind: ShapeKind = cmd.shape.parse()?;
        debug!("command: {} {:?}", kind, cmd.params);
        self.document(kind, &cmd.params)
    }
}

#[wasm_bindgen]
impl ShapeEngine {
    pub fn execute_command(&self, cmd_json: &str) -> String {
        match self.run_command(cmd_json) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("command rejected: {}", e);
                serde_json::json!({ "error": e.to_string() }).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;

    #[test]
    fn command_with_defaults() {
        let engine = ShapeEngine::default();
        let doc = engine.execute_command(r#"{"shape": "polygon"}"#);
        assert_eq!(doc, engine.document(ShapeKind::Polygon, &ShapeParameters::default()).unwrap());
        assert!(doc.starts_with("<svg "));
    }

    #[test]
    fn command_params_reach_the_generator() {
        let engine = ShapeEngine::default();
        let doc = engine.execute_command(r#"{"shape": "biscuit", "params": {"count": 1}}"#);
        assert!(doc.contains(r#"<path d="M 0,500 A 500,500 0 0 1 500,0 "#), "{}", doc);
    }

    #[test]
    fn unknown_shape_becomes_error_json() {
        let engine = ShapeEngine::default();
        let reply: serde_json::Value = serde_json::from_str(&engine.execute_command(r#"{"shape": "blob"}"#)).unwrap();
        assert_eq!(reply["error"], "unknown shape \"blob\"");
    }

    #[test]
    fn malformed_json_is_reported() {
        let engine = ShapeEngine::default();
        match engine.run_command("{not json") {
            Err(ShapeError::InvalidCommand(_)) => {}
            other => panic!("expected invalid command, got {:?}", other),
        }
        let reply: serde_json::Value = serde_json::from_str(&engine.execute_command("[]")).unwrap();
        assert!(reply["error"].as_str().unwrap().starts_with("invalid command"));
    }
}
