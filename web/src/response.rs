//! Response types.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use jsonapi_pipeline_core::Rendered;

/// A rendered body written with its registered content type.
///
/// JSON:API documents go out as `application/json`; the vendor media type is
/// not re-asserted on responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBody(pub Rendered);

impl IntoResponse for RenderedBody {
    fn into_response(self) -> Response {
        let Rendered { content_type, body } = self.0;
        ([(header::CONTENT_TYPE, content_type)], body).into_response()
    }
}
