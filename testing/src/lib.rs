//! # JSON:API Pipeline Testing
//!
//! Testing utilities for the JSON:API pipeline.
//!
//! This crate provides:
//! - Domain fixtures implementing `Resource` (authors, posts, roles, bios)
//! - Registry builders for the disabled and activated states
//! - Property-based testing strategies for JSON:API envelopes
//!
//! ## Example
//!
//! ```
//! use jsonapi_pipeline_testing::{activated_registry, fixtures::Author};
//!
//! let registry = activated_registry();
//! let rendered = registry.render("jsonapi", &Author::named("Johnny Rico"))?;
//! assert!(rendered.body.starts_with(r#"{"data":{"id":"author""#));
//! # Ok::<(), jsonapi_pipeline_core::PipelineError>(())
//! ```

pub mod fixtures;

/// Test helpers and utilities.
pub mod helpers {
    use jsonapi_pipeline_core::{PipelineRegistry, activate};

    /// A registry in the host pipeline's default state, without JSON:API.
    #[must_use]
    pub fn fresh_registry() -> PipelineRegistry {
        PipelineRegistry::with_defaults()
    }

    /// A registry with JSON:API activated.
    #[must_use]
    pub fn activated_registry() -> PipelineRegistry {
        let mut registry = PipelineRegistry::with_defaults();
        activate(&mut registry);
        registry
    }

    /// Install a test tracing subscriber honoring `RUST_LOG`.
    ///
    /// Safe to call from every test; only the first call installs.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "jsonapi_pipeline_core=debug".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;
    use serde_json::{Map, json};

    /// Arbitrary JSON values without floats, nested up to three levels.
    pub fn arb_json_value() -> impl Strategy<Value = serde_json::Value> {
        let leaf = prop_oneof![
            Just(serde_json::Value::Null),
            any::<bool>().prop_map(serde_json::Value::Bool),
            any::<i64>().prop_map(serde_json::Value::from),
            "[a-zA-Z0-9 ]{0,12}".prop_map(serde_json::Value::String),
        ];

        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::Array),
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                    .prop_map(|map| serde_json::Value::Object(map.into_iter().collect())),
            ]
        })
    }

    /// Arbitrary `attributes` objects.
    pub fn arb_attributes() -> impl Strategy<Value = Map<String, serde_json::Value>> {
        prop::collection::btree_map("[a-z_]{1,10}", arb_json_value(), 0..6)
            .prop_map(|map| map.into_iter().collect())
    }

    /// Arbitrary JSON:API request envelopes paired with their attributes.
    ///
    /// Envelopes carry `type`, sometimes `id`, `relationships` and a
    /// top-level `meta` alongside `attributes`.
    pub fn arb_envelope() -> impl Strategy<Value = (Map<String, serde_json::Value>, serde_json::Value)>
    {
        (
            arb_attributes(),
            "[a-z]{1,8}",
            proptest::option::of("[0-9]{1,4}"),
            arb_json_value(),
        )
            .prop_map(|(attributes, resource_type, id, meta)| {
                let mut data = Map::new();
                data.insert("type".to_string(), json!(resource_type));
                if let Some(id) = id {
                    data.insert("id".to_string(), json!(id));
                }
                data.insert(
                    "attributes".to_string(),
                    serde_json::Value::Object(attributes.clone()),
                );
                data.insert(
                    "relationships".to_string(),
                    json!({"owner": {"data": {"type": "owners", "id": "1"}}}),
                );
                (attributes, json!({"data": data, "meta": meta}))
            })
    }
}

// Re-export commonly used items
pub use helpers::{activated_registry, fresh_registry, init_test_tracing};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_helpers() {
        assert!(!jsonapi_pipeline_core::is_active(&fresh_registry()));
        assert!(jsonapi_pipeline_core::is_active(&activated_registry()));
    }

    #[test]
    fn test_init_tracing_twice() {
        init_test_tracing();
        init_test_tracing();
    }
}
