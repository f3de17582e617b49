//! Host-boundary result contract.
//!
//! The report shape is the wire contract with the automation host: compact
//! single-line JSON on stdout, absent fields omitted rather than null.

use serde::Serialize;

use crate::error::RenderError;

/// Message surfaced to the host alongside the exception detail on failure.
pub const FAILURE_MSG: &str = "Error during template rendering";

/// Structured result returned to the automation host.
///
/// Exactly one arm is populated: `rendered_template` when `success` is true,
/// `msg` and `exception` when it is false. `changed` is always false since
/// rendering never mutates host-side state, which is also why a check-mode
/// run is indistinguishable from a real one.
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    pub changed: bool,
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_template: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
}

impl RenderReport {
    /// Success arm carrying the rendered text.
    pub fn rendered(text: String) -> Self {
        Self {
            changed: false,
            success: true,
            rendered_template: Some(text),
            msg: None,
            exception: None,
        }
    }

    /// Failure arm carrying the captured render failure.
    pub fn failed(error: &RenderError) -> Self {
        Self {
            changed: false,
            success: false,
            rendered_template: None,
            msg: Some(FAILURE_MSG.to_string()),
            exception: Some(error.to_string()),
        }
    }

    /// Serialize to the compact single-line JSON the host consumes.
    pub fn to_json(&self) -> Result<String, RenderError> {
        let json = serde_json::to_string(self)
            .map_err(|e| RenderError::Internal(format!("Failed to serialize report: {}", e)))?;

        debug_assert!(!json.contains('\n'), "report JSON must be single-line");
        Ok(json)
    }
}

impl From<Result<String, RenderError>> for RenderReport {
    fn from(outcome: Result<String, RenderError>) -> Self {
        match outcome {
            Ok(text) => Self::rendered(text),
            Err(err) => Self::failed(&err),
        }
    }
}
