//! Application state for Axum handlers.
//!
//! Holds the pipeline registry built at startup. Handlers never mutate it;
//! the state is cloned per request by bumping the `Arc`.

use crate::config::PipelineConfig;
use axum::extract::FromRef;
use jsonapi_pipeline_core::PipelineRegistry;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// # Examples
///
/// ```ignore
/// use axum::{Router, routing::post};
/// use jsonapi_pipeline_core::{activate, PipelineRegistry};
/// use jsonapi_pipeline_web::AppState;
///
/// let mut registry = PipelineRegistry::with_defaults();
/// activate(&mut registry);
///
/// let app = Router::new()
///     .route("/authors", post(create_author))
///     .with_state(AppState::new(registry));
/// ```
#[derive(Clone, Debug)]
pub struct AppState {
    /// Parser and renderer registry
    pub registry: Arc<PipelineRegistry>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PipelineRegistry::with_defaults())
    }
}

impl AppState {
    /// Create application state around a fully built registry.
    #[must_use]
    pub fn new(registry: PipelineRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Build the registry from configuration and wrap it.
    #[must_use]
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.build_registry())
    }
}

impl FromRef<AppState> for Arc<PipelineRegistry> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonapi_pipeline_core::is_active;

    #[test]
    fn test_state_is_clone() {
        // Axum requires Clone state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_default_is_inactive() {
        let state = AppState::default();
        assert!(!is_active(&state.registry));
    }

    #[test]
    fn test_state_from_config() {
        let config = PipelineConfig {
            jsonapi_enabled: true,
            ..PipelineConfig::default()
        };
        let state = AppState::from_config(&config);
        assert!(is_active(&state.registry));

        let registry = Arc::<PipelineRegistry>::from_ref(&state);
        assert!(Arc::ptr_eq(&registry, &state.registry));
    }
}
