//! Axum integration for the JSON:API pipeline.
//!
//! This crate is the host side of the pipeline: it owns HTTP concerns and
//! delegates body parsing and response rendering to the registry built at
//! startup.
//!
//! # Request Flow
//!
//! 1. **Startup** builds a `PipelineRegistry` from `PipelineConfig`, activating
//!    JSON:API only when enabled
//! 2. **HTTP Request** arrives at an Axum handler
//! 3. **`RequestParams`** picks a parser by `Content-Type` and yields `Params`
//! 4. **Handler** builds a domain object from the parameters
//! 5. **`Renderer`** renders it in the requested output format
//! 6. **`RenderedBody`** is written with its content type
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::post};
//! use jsonapi_pipeline_web::{AppState, PipelineConfig, Renderer, RequestParams, WebResult, RenderedBody};
//!
//! async fn create_author(
//!     renderer: Renderer,
//!     RequestParams(params): RequestParams,
//! ) -> WebResult<RenderedBody> {
//!     renderer.render("jsonapi", &Author::from_params(&params))
//! }
//!
//! let config = PipelineConfig::from_env();
//! let app = Router::new()
//!     .route("/authors", post(create_author))
//!     .layer(config.body_limit_layer())
//!     .with_state(AppState::from_config(&config));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod response;
pub mod state;

// Re-export key types for convenience
pub use config::PipelineConfig;
pub use error::AppError;
pub use extractors::{Renderer, RequestParams};
pub use response::RenderedBody;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
