//! Document rendering.
//!
//! [`render`] walks a resource's declared schema and builds a [`Document`].
//! Rendering is all-or-nothing: if any declared relationship cannot be
//! resolved, no document is produced.

use crate::document::{Document, Linkage, RelationshipObject, ResourceObject};
use crate::error::{PipelineError, Result};
use crate::media_type::JSON_MEDIA_TYPE;
use crate::resource::{Related, RelationshipDecl, Resource, ResourceSchema};
use serde_json::{Map, Value};

/// A serialized response body with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// `Content-Type` for the response
    pub content_type: &'static str,
    /// Serialized body
    pub body: String,
}

impl Rendered {
    /// A JSON body.
    #[must_use]
    pub fn json(body: String) -> Self {
        Self {
            content_type: JSON_MEDIA_TYPE,
            body,
        }
    }
}

/// Render `resource` as a JSON:API document using `schema`.
///
/// An object without a persisted identity gets the schema's singular kind as
/// its `id` (an unsaved author renders with `"id": "author"`), never `null`.
///
/// # Errors
///
/// Returns [`PipelineError::UnresolvableRelationship`] if a declared
/// relationship cannot be read, or resolves with a different cardinality
/// than declared.
pub fn render<R: Resource + ?Sized>(resource: &R, schema: &ResourceSchema) -> Result<Document> {
    let id = resource
        .identity()
        .unwrap_or_else(|| schema.kind().to_string());

    let attributes: Map<String, Value> = schema
        .attributes()
        .iter()
        .map(|name| {
            let value = resource.attribute(name).unwrap_or(Value::Null);
            ((*name).to_string(), value)
        })
        .collect();

    let mut relationships = Map::new();
    for decl in schema.relationships() {
        let object = resolve_relationship(resource, decl)?;
        relationships.insert(decl.name().to_string(), object.to_value()?);
    }

    Ok(Document {
        data: ResourceObject {
            id,
            resource_type: schema.resource_type().to_string(),
            attributes,
            relationships,
        },
    })
}

/// Render `resource` against its own schema.
///
/// # Errors
///
/// See [`render`].
pub fn render_resource<R: Resource + ?Sized>(resource: &R) -> Result<Document> {
    render(resource, resource.schema())
}

/// Render `resource` and encode the document as a JSON body.
///
/// # Errors
///
/// See [`render`]. Also returns [`PipelineError::Serialization`] if encoding
/// fails.
pub fn render_to_string<R: Resource + ?Sized>(resource: &R) -> Result<Rendered> {
    let document = render_resource(resource)?;
    Ok(Rendered::json(serde_json::to_string(&document)?))
}

fn resolve_relationship<R: Resource + ?Sized>(
    resource: &R,
    decl: &RelationshipDecl,
) -> Result<RelationshipObject> {
    let related = resource.relationship(decl.name()).ok_or_else(|| {
        PipelineError::unresolvable(decl.name(), "relationship is not readable")
    })?;

    if related.cardinality() != decl.cardinality() {
        return Err(PipelineError::unresolvable(
            decl.name(),
            format!(
                "declared {:?} but resolved {:?}",
                decl.cardinality(),
                related.cardinality()
            ),
        ));
    }

    let data = match related {
        Related::One(None) => None,
        Related::One(Some(target)) => Some(Linkage::One(target)),
        Related::Many(targets) if targets.is_empty() => None,
        Related::Many(targets) => Some(Linkage::Many(targets)),
    };

    Ok(RelationshipObject { data })
}
