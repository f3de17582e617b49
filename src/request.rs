//! Render request construction and the input-error boundary.
//!
//! Everything here runs before the engine is touched: a request that fails
//! to parse is a fatal configuration problem, not a render failure.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::RenderError;

/// A single render invocation: template text, variable bindings, strictness.
///
/// Immutable once constructed and discarded after the call returns. Host
/// documents carrying unknown fields are rejected so a misspelled option
/// cannot silently change behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderRequest {
    /// Template text containing placeholder markers.
    pub template: String,

    /// Variable bindings substituted into the template.
    pub values: Map<String, Value>,

    /// Fail the render when a referenced variable has no binding.
    #[serde(default)]
    pub strict: bool,
}

impl RenderRequest {
    /// Create a request in the default lenient mode.
    pub fn new<S: Into<String>>(template: S, values: Map<String, Value>) -> Self {
        Self { template: template.into(), values, strict: false }
    }

    /// Toggle strict validation of missing variables.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parse a JSON request document.
    pub fn from_json(document: &str) -> Result<Self, RenderError> {
        serde_json::from_str(document).map_err(|e| RenderError::invalid_request(e.to_string()))
    }

    /// Parse a YAML request document.
    pub fn from_yaml(document: &str) -> Result<Self, RenderError> {
        serde_yaml::from_str(document).map_err(|e| RenderError::invalid_request(e.to_string()))
    }

    /// Load a request document, selecting the parser from the file extension.
    pub fn from_request_file(path: &Path) -> Result<Self, RenderError> {
        let content = fs::read_to_string(path)?;
        match extension(path) {
            Some("json") => Self::from_json(&content),
            Some("yml") | Some("yaml") => Self::from_yaml(&content),
            _ => Err(RenderError::invalid_request(format!(
                "Unsupported request file extension: {} (expected .json, .yml, or .yaml)",
                path.display()
            ))),
        }
    }
}

/// Parse an inline JSON object string into a bindings map.
pub fn values_from_json(document: &str) -> Result<Map<String, Value>, RenderError> {
    let value: Value = serde_json::from_str(document).map_err(|e| RenderError::ParseError {
        what: "values JSON".to_string(),
        details: e.to_string(),
    })?;
    into_bindings("values JSON", value)
}

/// Load a bindings map from a JSON or YAML file.
pub fn values_from_file(path: &Path) -> Result<Map<String, Value>, RenderError> {
    let content = fs::read_to_string(path)?;
    let what = format!("values file {}", path.display());

    let value: Value = match extension(path) {
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| RenderError::ParseError { what: what.clone(), details: e.to_string() })?,
        Some("yml") | Some("yaml") => serde_yaml::from_str(&content)
            .map_err(|e| RenderError::ParseError { what: what.clone(), details: e.to_string() })?,
        _ => {
            return Err(RenderError::invalid_request(format!(
                "Unsupported values file extension: {} (expected .json, .yml, or .yaml)",
                path.display()
            )));
        }
    };

    into_bindings(&what, value)
}

/// Require a top-level object; scalar or list documents are input errors.
fn into_bindings(what: &str, value: Value) -> Result<Map<String, Value>, RenderError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(RenderError::ParseError {
            what: what.to_string(),
            details: format!("expected an object of bindings, found {}", value_kind(&other)),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
