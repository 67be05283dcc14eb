//! Error types for parsing and rendering operations.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Error taxonomy for the JSON:API pipeline extension.
///
/// A request envelope without `data.attributes` is not an error; it parses to
/// an empty parameter set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    // ═══════════════════════════════════════════════════════════
    // Request Parsing
    // ═══════════════════════════════════════════════════════════

    /// Inbound body bytes are not valid JSON.
    #[error("Malformed request body: {reason}")]
    MalformedBody {
        /// Decoder message
        reason: String,
    },

    // ═══════════════════════════════════════════════════════════
    // Document Rendering
    // ═══════════════════════════════════════════════════════════

    /// A declared relationship could not be read from the resource.
    #[error("Unresolvable relationship '{name}': {reason}")]
    UnresolvableRelationship {
        /// Declared relationship name
        name: String,
        /// Why resolution failed
        reason: String,
    },

    /// The requested output format has no registered renderer.
    #[error("Unsupported render format: {format}")]
    UnsupportedFormat {
        /// Requested format name
        format: String,
    },

    /// A rendered document could not be encoded as JSON.
    #[error("Failed to serialize document: {0}")]
    Serialization(String),
}

impl PipelineError {
    /// Returns `true` if this error was caused by what the client sent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jsonapi_pipeline_core::PipelineError;
    /// let err = PipelineError::MalformedBody { reason: "eof".into() };
    /// assert!(err.is_client_error());
    /// ```
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::MalformedBody { .. })
    }

    pub(crate) fn unresolvable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnresolvableRelationship {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
