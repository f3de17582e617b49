use std::io;

use thiserror::Error;

/// Library-wide error type for stache operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Underlying I/O failure reading a request or values file.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Request is missing a required field or has the wrong shape.
    #[error("Invalid render request: {0}")]
    InvalidRequest(String),

    /// Parse error in a values document.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// The engine rejected the template during rendering.
    #[error("Template rendering failed: {0}")]
    Render(#[from] minijinja::Error),

    /// Internal failure producing host output.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RenderError {
    pub(crate) fn invalid_request<S: Into<String>>(message: S) -> Self {
        RenderError::InvalidRequest(message.into())
    }

    /// True for errors rejected before any render attempt was made.
    ///
    /// Input errors are fatal configuration problems and never produce a
    /// report; render errors are wrapped into the failure arm of the report.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, RenderError::Render(_))
    }

    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            RenderError::Io(err) => err.kind(),
            RenderError::InvalidRequest(_) | RenderError::ParseError { .. } => {
                io::ErrorKind::InvalidInput
            }
            RenderError::Render(_) => io::ErrorKind::InvalidData,
            RenderError::Internal(_) => io::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_classified_before_render_errors() {
        let invalid = RenderError::invalid_request("Missing required field: template");
        assert!(invalid.is_input_error());
        assert_eq!(invalid.kind(), io::ErrorKind::InvalidInput);

        let parse = RenderError::ParseError {
            what: "values JSON".to_string(),
            details: "expected an object".to_string(),
        };
        assert!(parse.is_input_error());
        assert_eq!(parse.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn engine_errors_are_render_errors() {
        let err = minijinja::Environment::new().render_str("{{ unclosed", ()).unwrap_err();
        let wrapped = RenderError::from(err);

        assert!(!wrapped.is_input_error());
        assert_eq!(wrapped.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn display_includes_detail() {
        let err = RenderError::ParseError {
            what: "values file vals.json".to_string(),
            details: "expected an object of bindings, found a string".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Failed to parse values file vals.json: expected an object of bindings, found a string"
        );
    }
}
