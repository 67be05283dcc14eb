//! Request body parsers.
//!
//! A parser turns raw body bytes into [`Params`]. Parsers are plain functions:
//! they hold no state and can run on any number of requests at once.

use crate::error::{PipelineError, Result};
use crate::params::Params;
use serde_json::Value;

/// Key under which [`parse_json`] stores a top-level value that is not an object.
pub const JSON_ROOT_KEY: &str = "_json";

/// Parse a JSON:API request body into request parameters.
///
/// JSON:API nests client fields under `data.attributes`. Only that object is
/// returned; `type`, `id`, `relationships`, `meta` and `links` are dropped.
///
/// An empty body, or an envelope without an attributes object, yields empty
/// parameters.
///
/// # Errors
///
/// Returns [`PipelineError::MalformedBody`] if the body is not valid JSON.
///
/// # Example
///
/// ```
/// use jsonapi_pipeline_core::parser::parse_jsonapi;
///
/// let body = br#"{"data": {"attributes": {"name": "John Doe"}, "type": "users"}}"#;
/// let params = parse_jsonapi(body)?;
///
/// assert_eq!(params.get_str("name"), Some("John Doe"));
/// assert!(!params.contains_key("type"));
/// # Ok::<(), jsonapi_pipeline_core::PipelineError>(())
/// ```
pub fn parse_jsonapi(raw_body: &[u8]) -> Result<Params> {
    let Some(document) = decode(raw_body)? else {
        return Ok(Params::new());
    };

    let attributes = match document {
        Value::Object(mut root) => match root.remove("data") {
            Some(Value::Object(mut data)) => data.remove("attributes"),
            _ => None,
        },
        _ => None,
    };

    match attributes {
        Some(Value::Object(map)) => Ok(Params::from(map)),
        _ => Ok(Params::new()),
    }
}

/// Parse a plain JSON request body into request parameters.
///
/// Objects become parameters key by key. Any other JSON value is stored under
/// [`JSON_ROOT_KEY`].
///
/// # Errors
///
/// Returns [`PipelineError::MalformedBody`] if the body is not valid JSON.
pub fn parse_json(raw_body: &[u8]) -> Result<Params> {
    match decode(raw_body)? {
        None => Ok(Params::new()),
        Some(Value::Object(map)) => Ok(Params::from(map)),
        Some(other) => Ok([(JSON_ROOT_KEY, other)].into_iter().collect()),
    }
}

/// Decode a body, treating blank input as "no document".
fn decode(raw_body: &[u8]) -> Result<Option<Value>> {
    if raw_body.trim_ascii().is_empty() {
        return Ok(None);
    }

    serde_json::from_slice(raw_body)
        .map(Some)
        .map_err(|e| PipelineError::MalformedBody {
            reason: e.to_string(),
        })
}
