//! Media-type and output-format registry.
//!
//! The registry is the host pipeline's dispatch table:
//! - body parsers keyed by media type (with short-name aliases)
//! - renderers keyed by output format name
//! - the names of installed extensions
//!
//! It is built with `&mut` access during startup and then shared immutably
//! (typically behind an `Arc`) while requests are served, so lookups need no
//! locking.
//!
//! # Example
//!
//! ```
//! use jsonapi_pipeline_core::{activate, PipelineRegistry};
//! use std::sync::Arc;
//!
//! let mut registry = PipelineRegistry::with_defaults();
//! activate(&mut registry);
//!
//! let registry = Arc::new(registry);
//! let params = registry.parse_body(
//!     Some("application/vnd.api+json; charset=utf-8"),
//!     br#"{"data": {"attributes": {"name": "Johnny Rico"}}}"#,
//! )?;
//! assert_eq!(params.get_str("name"), Some("Johnny Rico"));
//! # Ok::<(), jsonapi_pipeline_core::PipelineError>(())
//! ```

use crate::error::{PipelineError, Result};
use crate::extension::PipelineExtension;
use crate::media_type::{JSON_FORMAT, JSON_MEDIA_TYPE, essence};
use crate::params::Params;
use crate::parser::parse_json;
use crate::render::Rendered;
use crate::resource::Resource;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// A request body parser.
pub type ParserFn = Arc<dyn Fn(&[u8]) -> Result<Params> + Send + Sync>;

/// An output-format renderer.
pub type RendererFn = Arc<dyn Fn(&dyn Resource) -> Result<Rendered> + Send + Sync>;

/// Dispatch table for body parsers and output renderers.
#[derive(Clone, Default)]
pub struct PipelineRegistry {
    parsers: HashMap<String, ParserFn>,
    aliases: HashMap<String, String>,
    renderers: HashMap<String, RendererFn>,
    extensions: BTreeSet<&'static str>,
}

impl PipelineRegistry {
    /// Create an empty registry with no parsers or renderers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the host pipeline's default parsers.
    ///
    /// Only `application/json` is claimed; the JSON:API media type stays
    /// unregistered until [`activate`](crate::activate) runs.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_parser(JSON_MEDIA_TYPE, Some(JSON_FORMAT), Arc::new(parse_json));
        registry
    }

    /// Register a body parser for `media_type`, optionally under a short alias.
    ///
    /// Returns `true` if a parser for that media type was replaced.
    pub fn register_parser(
        &mut self,
        media_type: &str,
        alias: Option<&str>,
        parser: ParserFn,
    ) -> bool {
        let media_type = essence(media_type);
        if let Some(alias) = alias {
            self.aliases.insert(alias.to_string(), media_type.clone());
        }
        tracing::debug!(media_type = %media_type, alias = ?alias, "Registered body parser");
        self.parsers.insert(media_type, parser).is_some()
    }

    /// Register a renderer for output format `format`.
    ///
    /// Returns `true` if a renderer for that format was replaced.
    pub fn register_renderer(&mut self, format: &str, renderer: RendererFn) -> bool {
        tracing::debug!(format = %format, "Registered renderer");
        self.renderers.insert(format.to_string(), renderer).is_some()
    }

    /// Install an extension once.
    ///
    /// Returns `false` without touching the registry if an extension with the
    /// same name is already installed.
    pub fn install(&mut self, extension: &dyn PipelineExtension) -> bool {
        let name = extension.name();
        if self.extensions.contains(name) {
            tracing::debug!(extension = name, "Extension already installed");
            return false;
        }
        extension.install(self);
        self.extensions.insert(name);
        tracing::info!(extension = name, "Installed pipeline extension");
        true
    }

    /// Whether an extension with this name has been installed.
    #[must_use]
    pub fn is_installed(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    /// Find the parser for a `Content-Type` header value or alias.
    ///
    /// Parameters such as `charset` are ignored; the base type must match
    /// exactly.
    #[must_use]
    pub fn parser_for(&self, content_type: &str) -> Option<&ParserFn> {
        let key = essence(content_type);
        self.parsers.get(&key).or_else(|| {
            self.aliases
                .get(&key)
                .and_then(|media_type| self.parsers.get(media_type))
        })
    }

    /// Parse a request body according to its `Content-Type`.
    ///
    /// A body with no content type, or a content type nobody claimed, yields
    /// empty parameters.
    ///
    /// # Errors
    ///
    /// Propagates [`PipelineError::MalformedBody`] from the matched parser.
    pub fn parse_body(&self, content_type: Option<&str>, body: &[u8]) -> Result<Params> {
        let Some(parser) = content_type.and_then(|ct| self.parser_for(ct)) else {
            tracing::trace!(content_type = ?content_type, "No body parser registered");
            return Ok(Params::new());
        };
        tracing::trace!(content_type = ?content_type, bytes = body.len(), "Parsing request body");
        parser(body)
    }

    /// Render `resource` in output format `format`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::UnsupportedFormat`] if no renderer is
    /// registered for `format`, or the renderer's own error.
    pub fn render(&self, format: &str, resource: &dyn Resource) -> Result<Rendered> {
        let renderer = self
            .renderers
            .get(format)
            .ok_or_else(|| PipelineError::UnsupportedFormat {
                format: format.to_string(),
            })?;
        renderer(resource)
    }

    /// Whether a parser is registered for this media type or alias.
    #[must_use]
    pub fn has_parser(&self, content_type: &str) -> bool {
        self.parser_for(content_type).is_some()
    }

    /// Whether a renderer is registered for this format.
    #[must_use]
    pub fn has_renderer(&self, format: &str) -> bool {
        self.renderers.contains_key(format)
    }

    /// Registered media types, sorted.
    #[must_use]
    pub fn media_types(&self) -> Vec<String> {
        let mut media_types: Vec<String> = self.parsers.keys().cloned().collect();
        media_types.sort();
        media_types
    }

    /// Registered `(alias, media type)` pairs, sorted by alias.
    #[must_use]
    pub fn aliases(&self) -> Vec<(String, String)> {
        let mut aliases: Vec<(String, String)> = self
            .aliases
            .iter()
            .map(|(alias, media_type)| (alias.clone(), media_type.clone()))
            .collect();
        aliases.sort();
        aliases
    }

    /// Registered output formats, sorted.
    #[must_use]
    pub fn formats(&self) -> Vec<String> {
        let mut formats: Vec<String> = self.renderers.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Installed extension names, sorted.
    #[must_use]
    pub fn extensions(&self) -> Vec<&'static str> {
        self.extensions.iter().copied().collect()
    }
}

impl fmt::Debug for PipelineRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineRegistry")
            .field("media_types", &self.media_types())
            .field("aliases", &self.aliases())
            .field("formats", &self.formats())
            .field("extensions", &self.extensions)
            .finish()
    }
}
