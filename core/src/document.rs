//! JSON:API document types.
//!
//! Struct field order is the wire order, and the attribute and relationship
//! maps keep insertion order, so a document serializes identically every time
//! it is built from the same state.

use crate::resource::ResourceIdentifier;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level JSON:API document with a single primary resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Primary data
    pub data: ResourceObject,
}

/// A resource object: `id`, `type`, `attributes`, `relationships`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceObject {
    /// Resource identity
    pub id: String,
    /// Resource type
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Declared attributes in declaration order
    pub attributes: Map<String, Value>,
    /// Declared relationships in declaration order
    pub relationships: Map<String, Value>,
}

/// Relationship object wrapping resource linkage.
///
/// `data` is always present; an empty relationship serializes as
/// `{"data": null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipObject {
    /// Resource linkage
    pub data: Option<Linkage>,
}

/// Non-empty resource linkage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linkage {
    /// To-one linkage
    One(ResourceIdentifier),
    /// To-many linkage
    Many(Vec<ResourceIdentifier>),
}

impl RelationshipObject {
    /// A relationship with nothing linked.
    #[must_use]
    pub const fn empty() -> Self {
        Self { data: None }
    }

    /// Encode as a JSON value for insertion into a relationships map.
    ///
    /// # Errors
    ///
    /// Returns an error if the linkage cannot be encoded.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
