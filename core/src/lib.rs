//! # JSON:API Pipeline Core
//!
//! Teaches an HTTP request/response pipeline the JSON:API media type.
//!
//! The crate provides two independent pieces that share only the media-type
//! identifier and the JSON codec:
//!
//! - **Request parsing**: a body parser registered under
//!   `application/vnd.api+json` that unwraps `data.attributes` into the same
//!   [`Params`] tree every other content type produces.
//! - **Document rendering**: a renderer registered under the `jsonapi` output
//!   format that walks a [`Resource`]'s declared schema and emits a JSON:API
//!   document with `id`, `type`, `attributes` and `relationships`.
//!
//! Both are opt-in. A fresh [`PipelineRegistry`] knows nothing about JSON:API
//! until [`activate`] runs.
//!
//! ## Flow
//!
//! ```text
//! request ──► PipelineRegistry::parse_body ──► parser (by Content-Type) ──► Params
//!
//! handler ──► PipelineRegistry::render("jsonapi", &resource) ──► Document ──► JSON body
//! ```
//!
//! ## Example
//!
//! ```
//! use jsonapi_pipeline_core::{activate, PipelineRegistry};
//!
//! let mut registry = PipelineRegistry::with_defaults();
//! activate(&mut registry);
//!
//! let params = registry.parse_body(
//!     Some("application/vnd.api+json"),
//!     br#"{"data": {"attributes": {"name": "John Doe"}, "type": "users"}}"#,
//! )?;
//! assert_eq!(params.get_str("name"), Some("John Doe"));
//! # Ok::<(), jsonapi_pipeline_core::PipelineError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod document;
pub mod error;
pub mod extension;
pub mod jsonapi;
pub mod media_type;
pub mod params;
pub mod parser;
pub mod registry;
pub mod render;
pub mod resource;

// Re-export key types for convenience
pub use document::{Document, Linkage, RelationshipObject, ResourceObject};
pub use error::{PipelineError, Result};
pub use extension::PipelineExtension;
pub use jsonapi::{JsonApiExtension, activate, is_active};
pub use media_type::{JSON_MEDIA_TYPE, JSONAPI_FORMAT, JSONAPI_MEDIA_TYPE};
pub use params::Params;
pub use parser::{parse_json, parse_jsonapi};
pub use registry::{ParserFn, PipelineRegistry, RendererFn};
pub use render::{Rendered, render, render_resource, render_to_string};
pub use resource::{
    Cardinality, Related, RelationshipDecl, Resource, ResourceIdentifier, ResourceSchema,
};
