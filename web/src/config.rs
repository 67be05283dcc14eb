//! Configuration for the host pipeline.
//!
//! Loaded from environment variables with sensible defaults. JSON:API support
//! stays off unless explicitly enabled.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `JSONAPI_ENABLED` | `false` | Activate the JSON:API parser and renderer |
//! | `BODY_LIMIT_BYTES` | `2097152` | Maximum request body size |

use axum::extract::DefaultBodyLimit;
use jsonapi_pipeline_core::{PipelineRegistry, activate};
use serde::{Deserialize, Serialize};
use std::env;

/// Default maximum request body size (2 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Host pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Activate JSON:API parsing and rendering at startup
    pub jsonapi_enabled: bool,
    /// Maximum request body size in bytes
    pub body_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            jsonapi_enabled: false,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            jsonapi_enabled: lookup("JSONAPI_ENABLED")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.jsonapi_enabled),
            body_limit: lookup("BODY_LIMIT_BYTES")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.body_limit),
        }
    }

    /// Build the registry this configuration describes.
    #[must_use]
    pub fn build_registry(&self) -> PipelineRegistry {
        let mut registry = PipelineRegistry::with_defaults();
        if self.jsonapi_enabled {
            activate(&mut registry);
        }
        tracing::info!(
            jsonapi_enabled = self.jsonapi_enabled,
            media_types = ?registry.media_types(),
            formats = ?registry.formats(),
            "Pipeline registry built"
        );
        registry
    }

    /// Layer enforcing the configured body size limit.
    #[must_use]
    pub fn body_limit_layer(&self) -> DefaultBodyLimit {
        DefaultBodyLimit::max(self.body_limit)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
