//! Template rendering delegate.
//!
//! A fresh minijinja environment is built per call so strictness stays a
//! per-call property rather than process-global engine state. Rendering is
//! synchronous and side-effect-free; the bindings are never mutated and a
//! failed render is not retried.

use minijinja::{Environment, UndefinedBehavior};

use crate::error::RenderError;
use crate::request::RenderRequest;

/// Substitute the request's bindings into its template.
///
/// In strict mode a reference to an unbound variable fails the render; in
/// lenient mode it renders as an empty substitution. Non-string scalars are
/// stringified by the engine's display rules (numbers and booleans in their
/// canonical text form).
pub fn render(request: &RenderRequest) -> Result<String, RenderError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(if request.strict {
        UndefinedBehavior::Strict
    } else {
        UndefinedBehavior::Lenient
    });

    Ok(env.render_str(&request.template, &request.values)?)
}
