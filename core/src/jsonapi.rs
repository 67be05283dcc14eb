//! JSON:API activation.
//!
//! Nothing JSON:API-specific is registered by default. [`activate`] installs
//! the request parser under `application/vnd.api+json` (alias `jsonapi`) and
//! the document renderer under the `jsonapi` output format.

use crate::extension::PipelineExtension;
use crate::media_type::{JSONAPI_FORMAT, JSONAPI_MEDIA_TYPE};
use crate::parser::parse_jsonapi;
use crate::registry::PipelineRegistry;
use crate::render::render_to_string;
use crate::resource::Resource;
use std::sync::Arc;

/// Extension name recorded in the registry.
pub const EXTENSION_NAME: &str = "jsonapi";

/// The JSON:API parser and renderer registrations.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonApiExtension;

impl PipelineExtension for JsonApiExtension {
    fn name(&self) -> &'static str {
        EXTENSION_NAME
    }

    fn install(&self, registry: &mut PipelineRegistry) {
        registry.register_parser(JSONAPI_MEDIA_TYPE, Some(JSONAPI_FORMAT), Arc::new(parse_jsonapi));
        registry.register_renderer(
            JSONAPI_FORMAT,
            Arc::new(|resource: &dyn Resource| render_to_string(resource)),
        );
    }
}

/// Enable JSON:API parsing and rendering on `registry`.
///
/// Run once during startup, before the registry is shared with request
/// handlers. Repeat calls are no-ops.
///
/// # Example
///
/// ```
/// use jsonapi_pipeline_core::{activate, PipelineRegistry};
///
/// let mut registry = PipelineRegistry::with_defaults();
/// assert!(!registry.has_renderer("jsonapi"));
///
/// activate(&mut registry);
/// activate(&mut registry);
///
/// assert!(registry.has_renderer("jsonapi"));
/// assert!(registry.has_parser("application/vnd.api+json"));
/// ```
pub fn activate(registry: &mut PipelineRegistry) {
    registry.install(&JsonApiExtension);
}

/// Whether [`activate`] has run on `registry`.
#[must_use]
pub fn is_active(registry: &PipelineRegistry) -> bool {
    registry.is_installed(EXTENSION_NAME)
}
