//! Custom Axum extractors.
//!
//! - `RequestParams`: parse the request body through the pipeline registry
//! - `Renderer`: render a resource in a registered output format
//!
//! # Examples
//!
//! ```ignore
//! use jsonapi_pipeline_web::{AppError, RenderedBody, Renderer, RequestParams};
//!
//! async fn create_author(
//!     renderer: Renderer,
//!     RequestParams(params): RequestParams,
//! ) -> Result<RenderedBody, AppError> {
//!     let author = Author::from_params(&params);
//!     renderer.render("jsonapi", &author)
//! }
//! ```

use crate::error::AppError;
use crate::response::RenderedBody;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRef, FromRequest, FromRequestParts, Request},
    http::{header, request::Parts},
};
use jsonapi_pipeline_core::{Params, PipelineRegistry, Resource};
use std::sync::Arc;

/// Request parameters parsed according to the `Content-Type` header.
///
/// Bodies whose content type has no registered parser produce empty
/// parameters. A body the matched parser cannot decode is rejected with
/// 400 Bad Request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams(pub Params);

#[async_trait]
impl<S> FromRequest<S> for RequestParams
where
    S: Send + Sync,
    Arc<PipelineRegistry>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let registry = Arc::<PipelineRegistry>::from_ref(state);
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            AppError::new(
                rejection.status(),
                rejection.body_text(),
                "INVALID_BODY".to_string(),
            )
        })?;

        let params = registry
            .parse_body(content_type.as_deref(), &body)
            .map_err(|err| {
                tracing::warn!(
                    content_type = ?content_type,
                    error = %err,
                    "Rejected request body"
                );
                AppError::from(err)
            })?;

        Ok(Self(params))
    }
}

/// Handle for rendering resources through the registry's output formats.
#[derive(Debug, Clone)]
pub struct Renderer(Arc<PipelineRegistry>);

impl Renderer {
    /// Render `resource` in output format `format`.
    ///
    /// # Errors
    ///
    /// Returns a 500 `MISSING_TEMPLATE` error if the format is not
    /// registered, or a 500 error if rendering fails.
    pub fn render(&self, format: &str, resource: &dyn Resource) -> Result<RenderedBody, AppError> {
        self.0
            .render(format, resource)
            .map(RenderedBody)
            .map_err(AppError::from)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Renderer
where
    S: Send + Sync,
    Arc<PipelineRegistry>: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(Arc::<PipelineRegistry>::from_ref(state)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::{
        body::Body,
        http::{self, StatusCode},
    };
    use jsonapi_pipeline_testing::{activated_registry, fixtures::Author, fresh_registry};
    use serde_json::json;

    fn jsonapi_request(body: &'static str) -> Request {
        http::Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/vnd.api+json")
            .body(Body::from(body))
            .expect("Valid request")
    }

    #[tokio::test]
    async fn test_params_from_jsonapi_body() {
        let state = AppState::new(activated_registry());
        let req = jsonapi_request(r#"{"data": {"attributes": {"name": "John Doe"}, "type": "users"}}"#);

        let RequestParams(params) = RequestParams::from_request(req, &state)
            .await
            .expect("Should extract");

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("name"), Some(&json!("John Doe")));
    }

    #[tokio::test]
    async fn test_params_empty_when_not_activated() {
        let state = AppState::new(fresh_registry());
        let req = jsonapi_request(r#"{"data": {"attributes": {"name": "John Doe"}}}"#);

        let RequestParams(params) = RequestParams::from_request(req, &state)
            .await
            .expect("Should extract");

        assert!(params.is_empty());
    }

    #[tokio::test]
    async fn test_params_without_content_type() {
        let state = AppState::new(activated_registry());
        let req = http::Request::builder()
            .method("POST")
            .body(Body::from(r#"{"name": "x"}"#))
            .expect("Valid request");

        let RequestParams(params) = RequestParams::from_request(req, &state)
            .await
            .expect("Should extract");

        assert!(params.is_empty());
    }

    #[tokio::test]
    async fn test_params_malformed_body_rejected() {
        let state = AppState::new(activated_registry());
        let req = jsonapi_request(r#"{"data": "#);

        let err = RequestParams::from_request(req, &state)
            .await
            .expect_err("Should reject");

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "MALFORMED_BODY");
    }

    #[tokio::test]
    async fn test_renderer_uses_state_registry() {
        let state = AppState::new(activated_registry());
        let (mut parts, ()) = http::Request::builder()
            .body(())
            .expect("Valid request")
            .into_parts();

        let renderer = Renderer::from_request_parts(&mut parts, &state)
            .await
            .expect("Should extract");
        let rendered = renderer
            .render("jsonapi", &Author::named("Johnny Rico"))
            .expect("Should render");

        assert!(rendered.0.body.contains(r#""type":"authors""#));
    }

    #[tokio::test]
    async fn test_renderer_missing_format() {
        let state = AppState::new(fresh_registry());
        let (mut parts, ()) = http::Request::builder()
            .body(())
            .expect("Valid request")
            .into_parts();

        let renderer = Renderer::from_request_parts(&mut parts, &state)
            .await
            .expect("Should extract");
        let err = renderer
            .render("jsonapi", &Author::default())
            .expect_err("Should fail");

        assert_eq!(err.code(), "MISSING_TEMPLATE");
    }
}
