//! Domain object introspection for rendering.
//!
//! The renderer never reaches into a domain type directly. Instead the type
//! implements [`Resource`] and declares a [`ResourceSchema`]: the attributes and
//! relationships it exposes, in the order they should appear in documents.
//!
//! # Example
//!
//! ```
//! use jsonapi_pipeline_core::resource::{
//!     Related, RelationshipDecl, Resource, ResourceSchema,
//! };
//! use serde_json::{Value, json};
//!
//! static TAG_SCHEMA: ResourceSchema = ResourceSchema::new("tag", "tags")
//!     .with_attributes(&["label"])
//!     .with_relationships(&[RelationshipDecl::belongs_to("owner")]);
//!
//! struct Tag {
//!     id: Option<u64>,
//!     label: String,
//! }
//!
//! impl Resource for Tag {
//!     fn schema(&self) -> &ResourceSchema {
//!         &TAG_SCHEMA
//!     }
//!
//!     fn identity(&self) -> Option<String> {
//!         self.id.map(|id| id.to_string())
//!     }
//!
//!     fn attribute(&self, name: &str) -> Option<Value> {
//!         match name {
//!             "label" => Some(json!(self.label)),
//!             _ => None,
//!         }
//!     }
//!
//!     fn relationship(&self, name: &str) -> Option<Related> {
//!         match name {
//!             "owner" => Some(Related::none()),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a relationship links to at most one resource or to many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// `has_one` / `belongs_to`
    ToOne,
    /// `has_many`
    ToMany,
}

/// A declared relationship: its name and cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipDecl {
    name: &'static str,
    cardinality: Cardinality,
}

impl RelationshipDecl {
    /// Declare a relationship.
    #[must_use]
    pub const fn new(name: &'static str, cardinality: Cardinality) -> Self {
        Self { name, cardinality }
    }

    /// Declare a to-one relationship owned by this resource.
    #[must_use]
    pub const fn has_one(name: &'static str) -> Self {
        Self::new(name, Cardinality::ToOne)
    }

    /// Declare a to-one relationship pointing at an owner.
    #[must_use]
    pub const fn belongs_to(name: &'static str) -> Self {
        Self::new(name, Cardinality::ToOne)
    }

    /// Declare a to-many relationship.
    #[must_use]
    pub const fn has_many(name: &'static str) -> Self {
        Self::new(name, Cardinality::ToMany)
    }

    /// Relationship name as it appears in documents.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared cardinality.
    #[must_use]
    pub const fn cardinality(&self) -> Cardinality {
        self.cardinality
    }
}

/// Declared shape of a resource kind.
///
/// Schemas are built in `const` context so each domain type can keep one in a
/// `static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    kind: &'static str,
    resource_type: &'static str,
    attributes: &'static [&'static str],
    relationships: &'static [RelationshipDecl],
}

impl ResourceSchema {
    /// Create a schema with no attributes or relationships.
    ///
    /// `kind` is the singular name (`author`); `resource_type` is the
    /// canonical JSON:API type (`authors`).
    #[must_use]
    pub const fn new(kind: &'static str, resource_type: &'static str) -> Self {
        Self {
            kind,
            resource_type,
            attributes: &[],
            relationships: &[],
        }
    }

    /// Set the declared attribute names, in document order.
    #[must_use]
    pub const fn with_attributes(mut self, attributes: &'static [&'static str]) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the declared relationships, in document order.
    #[must_use]
    pub const fn with_relationships(mut self, relationships: &'static [RelationshipDecl]) -> Self {
        self.relationships = relationships;
        self
    }

    /// Singular kind name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// JSON:API `type` member.
    #[must_use]
    pub const fn resource_type(&self) -> &'static str {
        self.resource_type
    }

    /// Declared attribute names.
    #[must_use]
    pub const fn attributes(&self) -> &'static [&'static str] {
        self.attributes
    }

    /// Declared relationships.
    #[must_use]
    pub const fn relationships(&self) -> &'static [RelationshipDecl] {
        self.relationships
    }

    /// Find a declared relationship by name.
    #[must_use]
    pub fn relationship(&self, name: &str) -> Option<&RelationshipDecl> {
        self.relationships.iter().find(|decl| decl.name == name)
    }
}

/// A `{type, id}` pair identifying a resource.
///
/// Field order matches the wire order of linkage objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// JSON:API `type` member
    #[serde(rename = "type")]
    pub resource_type: String,
    /// JSON:API `id` member
    pub id: String,
}

impl ResourceIdentifier {
    /// Create an identifier.
    #[must_use]
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }
}

/// The resolved value of a relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Related {
    /// A to-one relationship, possibly unset.
    One(Option<ResourceIdentifier>),
    /// A to-many relationship, possibly empty.
    Many(Vec<ResourceIdentifier>),
}

impl Related {
    /// An unset to-one relationship.
    #[must_use]
    pub const fn none() -> Self {
        Self::One(None)
    }

    /// A to-one relationship pointing at `target`, if any.
    #[must_use]
    pub fn to_one<R: Resource + ?Sized>(target: Option<&R>) -> Self {
        Self::One(target.map(Resource::identifier))
    }

    /// A to-many relationship over `targets`, in their natural order.
    #[must_use]
    pub fn to_many<'a, R, I>(targets: I) -> Self
    where
        R: Resource + ?Sized + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        Self::Many(targets.into_iter().map(Resource::identifier).collect())
    }

    /// Cardinality of the resolved value.
    #[must_use]
    pub const fn cardinality(&self) -> Cardinality {
        match self {
            Self::One(_) => Cardinality::ToOne,
            Self::Many(_) => Cardinality::ToMany,
        }
    }

    /// Whether nothing is linked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(target) => target.is_none(),
            Self::Many(targets) => targets.is_empty(),
        }
    }
}

/// A domain object the document renderer can introspect.
///
/// Implementations are read-only views: the renderer only calls these methods
/// and never mutates the object.
pub trait Resource {
    /// The declared schema for this object's kind.
    fn schema(&self) -> &ResourceSchema;

    /// Persisted identity, or `None` if the object has not been saved.
    fn identity(&self) -> Option<String>;

    /// Current value of a declared attribute.
    ///
    /// `None` renders as `null`.
    fn attribute(&self, name: &str) -> Option<Value>;

    /// Current value of a declared relationship.
    ///
    /// `None` means the relationship cannot be read, which fails the render.
    fn relationship(&self, name: &str) -> Option<Related>;

    /// Identifier used when this object is the target of a linkage.
    ///
    /// An object without identity falls back to its singular kind name.
    fn identifier(&self) -> ResourceIdentifier {
        let schema = self.schema();
        ResourceIdentifier::new(
            schema.resource_type(),
            self.identity()
                .unwrap_or_else(|| schema.kind().to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static COMMENT_SCHEMA: ResourceSchema = ResourceSchema::new("comment", "comments")
        .with_attributes(&["body"])
        .with_relationships(&[RelationshipDecl::belongs_to("post")]);

    struct Comment {
        id: Option<u32>,
    }

    impl Resource for Comment {
        fn schema(&self) -> &ResourceSchema {
            &COMMENT_SCHEMA
        }

        fn identity(&self) -> Option<String> {
            self.id.map(|id| id.to_string())
        }

        fn attribute(&self, _name: &str) -> Option<Value> {
            None
        }

        fn relationship(&self, _name: &str) -> Option<Related> {
            Some(Related::none())
        }
    }

    #[test]
    fn test_schema_builders() {
        assert_eq!(COMMENT_SCHEMA.kind(), "comment");
        assert_eq!(COMMENT_SCHEMA.resource_type(), "comments");
        assert_eq!(COMMENT_SCHEMA.attributes(), &["body"]);
        assert_eq!(
            COMMENT_SCHEMA.relationship("post").map(RelationshipDecl::cardinality),
            Some(Cardinality::ToOne)
        );
        assert!(COMMENT_SCHEMA.relationship("author").is_none());
    }

    #[test]
    fn test_identifier_uses_identity() {
        let comment = Comment { id: Some(9) };
        assert_eq!(comment.identifier(), ResourceIdentifier::new("comments", "9"));
    }

    #[test]
    fn test_identifier_falls_back_to_kind() {
        let comment = Comment { id: None };
        assert_eq!(
            comment.identifier(),
            ResourceIdentifier::new("comments", "comment")
        );
    }

    #[test]
    fn test_related_helpers() {
        let comments = [Comment { id: Some(1) }, Comment { id: Some(2) }];

        let many = Related::to_many(&comments);
        assert_eq!(many.cardinality(), Cardinality::ToMany);
        assert!(!many.is_empty());

        let one = Related::to_one(comments.first());
        assert_eq!(
            one,
            Related::One(Some(ResourceIdentifier::new("comments", "1")))
        );

        assert!(Related::to_one::<Comment>(None).is_empty());
        assert!(Related::to_many::<Comment, _>([]).is_empty());
    }

    #[test]
    fn test_identifier_wire_order() {
        let encoded =
            serde_json::to_value(ResourceIdentifier::new("bios", "3")).unwrap_or_default();
        assert_eq!(encoded, json!({"type": "bios", "id": "3"}));
    }
}
