//! Media type identifiers and `Content-Type` matching.

/// The JSON:API media type.
pub const JSONAPI_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Short name for the JSON:API media type and output format.
pub const JSONAPI_FORMAT: &str = "jsonapi";

/// Plain JSON media type.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Short name for the plain JSON media type.
pub const JSON_FORMAT: &str = "json";

/// Reduce a `Content-Type` header value to its base type.
///
/// Parameters such as `charset` are dropped and the result is lowercased, so
/// `Application/Vnd.Api+JSON; charset=utf-8` becomes `application/vnd.api+json`.
///
/// # Example
///
/// ```
/// use jsonapi_pipeline_core::media_type::{essence, JSONAPI_MEDIA_TYPE};
///
/// assert_eq!(essence("application/vnd.api+json; charset=utf-8"), JSONAPI_MEDIA_TYPE);
/// ```
#[must_use]
pub fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
