//! Registry behavior before and after JSON:API activation

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use jsonapi_pipeline_core::{
    JSONAPI_FORMAT, JSONAPI_MEDIA_TYPE, Params, PipelineError, PipelineRegistry, activate,
};
use jsonapi_pipeline_testing::fixtures::Author;
use jsonapi_pipeline_testing::{activated_registry, fresh_registry, init_test_tracing};
use serde_json::json;
use std::sync::Arc;
use std::thread;

const PAYLOAD: &[u8] = br#"{"data": {"attributes": {"name": "Johnny Rico"}, "type": "authors"}}"#;

fn render_scenario(registry: &PipelineRegistry) -> Result<String, PipelineError> {
    let params = registry.parse_body(Some(JSONAPI_MEDIA_TYPE), PAYLOAD)?;
    let author = Author::from_params(&params);
    registry.render(JSONAPI_FORMAT, &author).map(|r| r.body)
}

#[test]
fn test_disabled_registry_parses_to_empty_params() {
    init_test_tracing();
    let registry = fresh_registry();

    assert_eq!(registry.parse_body(Some(JSONAPI_MEDIA_TYPE), b""), Ok(Params::new()));
    assert_eq!(registry.parse_body(Some(JSONAPI_MEDIA_TYPE), PAYLOAD), Ok(Params::new()));
}

#[test]
fn test_disabled_registry_rejects_jsonapi_format() {
    let registry = fresh_registry();

    assert_eq!(
        render_scenario(&registry),
        Err(PipelineError::UnsupportedFormat {
            format: "jsonapi".to_string()
        })
    );
}

#[test]
fn test_activated_registry_parses_and_renders() {
    init_test_tracing();
    let registry = activated_registry();

    let params = registry.parse_body(Some(JSONAPI_MEDIA_TYPE), PAYLOAD).unwrap();
    assert_eq!(params.get("name"), Some(&json!("Johnny Rico")));
    assert_eq!(params.len(), 1);

    assert_eq!(
        render_scenario(&registry).unwrap(),
        concat!(
            r#"{"data":{"id":"author","type":"authors","attributes":{"name":"Johnny Rico"},"#,
            r#""relationships":{"posts":{"data":null},"roles":{"data":null},"bio":{"data":null}}}}"#
        )
    );
}

#[test]
fn test_second_activation_changes_nothing() {
    let mut once = fresh_registry();
    activate(&mut once);

    let mut twice = fresh_registry();
    activate(&mut twice);
    activate(&mut twice);

    assert_eq!(format!("{once:?}"), format!("{twice:?}"));
    assert_eq!(render_scenario(&once), render_scenario(&twice));
    assert!(render_scenario(&twice).is_ok());
}

#[test]
fn test_activation_keeps_default_json_parser() {
    let registry = activated_registry();

    let params = registry
        .parse_body(Some("application/json"), br#"{"name": "Carmen"}"#)
        .unwrap();
    assert_eq!(params.get_str("name"), Some("Carmen"));
    assert_eq!(
        registry.media_types(),
        vec!["application/json".to_string(), JSONAPI_MEDIA_TYPE.to_string()]
    );
}

#[test]
fn test_shared_registry_serves_concurrent_requests() {
    let registry = Arc::new(activated_registry());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let body = format!(r#"{{"data": {{"attributes": {{"name": "trooper-{i}"}}}}}}"#);
                let params = registry
                    .parse_body(Some(JSONAPI_MEDIA_TYPE), body.as_bytes())
                    .unwrap();
                let author = Author::from_params(&params);
                registry.render(JSONAPI_FORMAT, &author).unwrap().body
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let body = handle.join().unwrap();
        assert!(body.contains(&format!(r#""name":"trooper-{i}""#)));
    }
}
