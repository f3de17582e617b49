//! stache: render a template string with variable bindings for an automation host.
//!
//! The crate is a thin adapter around a template engine. One operation is
//! exposed: take a [`RenderRequest`] (template text, a map of bindings, a
//! strictness flag), delegate substitution to the engine, and translate the
//! outcome into either plain rendered text or the host-facing
//! [`RenderReport`].
//!
//! ```
//! use stache::{RenderRequest, request};
//!
//! let values = request::values_from_json(r#"{"greetings": "Hello", "target": "world"}"#)?;
//! let request = RenderRequest::new("{{ greetings }} {{ target }}!", values);
//!
//! assert_eq!(stache::render(&request)?, "Hello world!");
//! # Ok::<(), stache::RenderError>(())
//! ```

pub mod engine;
pub mod error;
pub mod report;
pub mod request;

pub use error::RenderError;
pub use report::RenderReport;
pub use request::RenderRequest;

/// Render a request and return the rendered text.
///
/// Pure and synchronous; the request is not mutated and nothing is retried.
/// Rendering the same request twice yields identical output.
pub fn render(request: &RenderRequest) -> Result<String, RenderError> {
    engine::render(request)
}

/// Render a request and wrap the outcome in the host-boundary report.
///
/// Never fails: render errors become the failure arm of the report with the
/// engine diagnostic attached.
pub fn report(request: &RenderRequest) -> RenderReport {
    RenderReport::from(engine::render(request))
}
