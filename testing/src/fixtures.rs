//! Domain fixtures: authors, posts, roles and bios.
//!
//! These are small in-memory models implementing [`Resource`] so parser and
//! renderer behavior can be exercised without a real model layer.

use jsonapi_pipeline_core::{
    Params, Related, RelationshipDecl, Resource, ResourceIdentifier, ResourceSchema,
};
use serde_json::{Value, json};

/// Schema for [`Author`].
pub static AUTHOR_SCHEMA: ResourceSchema = ResourceSchema::new("author", "authors")
    .with_attributes(&["name"])
    .with_relationships(&[
        RelationshipDecl::has_many("posts"),
        RelationshipDecl::has_many("roles"),
        RelationshipDecl::has_one("bio"),
    ]);

/// Schema for [`Post`].
pub static POST_SCHEMA: ResourceSchema = ResourceSchema::new("post", "posts")
    .with_attributes(&["title", "body"])
    .with_relationships(&[RelationshipDecl::belongs_to("author")]);

/// Schema for [`Role`].
pub static ROLE_SCHEMA: ResourceSchema =
    ResourceSchema::new("role", "roles").with_attributes(&["name", "description"]);

/// Schema for [`Bio`].
pub static BIO_SCHEMA: ResourceSchema = ResourceSchema::new("bio", "bios")
    .with_attributes(&["content", "rating"])
    .with_relationships(&[RelationshipDecl::belongs_to("author")]);

/// An author with posts, roles and an optional bio.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Author {
    /// Persisted id
    pub id: Option<u64>,
    /// Display name
    pub name: Option<String>,
    /// Authored posts
    pub posts: Vec<Post>,
    /// Assigned roles
    pub roles: Vec<Role>,
    /// Biography
    pub bio: Option<Bio>,
}

impl Author {
    /// An unsaved author with a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Build an unsaved author from request parameters.
    ///
    /// Reads `name`; unknown keys are ignored.
    #[must_use]
    pub fn from_params(params: &Params) -> Self {
        Self {
            name: params.get_str("name").map(String::from),
            ..Self::default()
        }
    }

    /// Set the persisted id.
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

impl Resource for Author {
    fn schema(&self) -> &ResourceSchema {
        &AUTHOR_SCHEMA
    }

    fn identity(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "name" => self.name.as_ref().map(|n| json!(n)),
            _ => None,
        }
    }

    fn relationship(&self, name: &str) -> Option<Related> {
        match name {
            "posts" => Some(Related::to_many(&self.posts)),
            "roles" => Some(Related::to_many(&self.roles)),
            "bio" => Some(Related::to_one(self.bio.as_ref())),
            _ => None,
        }
    }
}

/// A blog post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Post {
    /// Persisted id
    pub id: Option<u64>,
    /// Title
    pub title: String,
    /// Body text
    pub body: String,
    /// Id of the owning author
    pub author_id: Option<u64>,
}

impl Post {
    /// A persisted post with a title.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Resource for Post {
    fn schema(&self) -> &ResourceSchema {
        &POST_SCHEMA
    }

    fn identity(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "title" => Some(json!(self.title)),
            "body" => Some(json!(self.body)),
            _ => None,
        }
    }

    fn relationship(&self, name: &str) -> Option<Related> {
        match name {
            "author" => Some(Related::One(self.author_id.map(|id| {
                ResourceIdentifier::new(AUTHOR_SCHEMA.resource_type(), id.to_string())
            }))),
            _ => None,
        }
    }
}

/// A role granted to an author.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Role {
    /// Persisted id
    pub id: Option<u64>,
    /// Role name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
}

impl Role {
    /// A persisted role.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            description: None,
        }
    }
}

impl Resource for Role {
    fn schema(&self) -> &ResourceSchema {
        &ROLE_SCHEMA
    }

    fn identity(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(json!(self.name)),
            "description" => self.description.as_ref().map(|d| json!(d)),
            _ => None,
        }
    }

    fn relationship(&self, _name: &str) -> Option<Related> {
        None
    }
}

/// An author biography.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bio {
    /// Persisted id
    pub id: Option<u64>,
    /// Biography text
    pub content: String,
    /// Reader rating
    pub rating: Option<u8>,
    /// Id of the owning author
    pub author_id: Option<u64>,
}

impl Bio {
    /// A persisted bio.
    #[must_use]
    pub fn new(id: u64, content: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            content: content.into(),
            ..Self::default()
        }
    }
}

impl Resource for Bio {
    fn schema(&self) -> &ResourceSchema {
        &BIO_SCHEMA
    }

    fn identity(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "content" => Some(json!(self.content)),
            "rating" => self.rating.map(|r| json!(r)),
            _ => None,
        }
    }

    fn relationship(&self, name: &str) -> Option<Related> {
        match name {
            "author" => Some(Related::One(self.author_id.map(|id| {
                ResourceIdentifier::new(AUTHOR_SCHEMA.resource_type(), id.to_string())
            }))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_from_params() {
        let params: Params = [("name", json!("Johnny Rico")), ("rank", json!("private"))]
            .into_iter()
            .collect();
        let author = Author::from_params(&params);

        assert_eq!(author.name.as_deref(), Some("Johnny Rico"));
        assert_eq!(author.identity(), None);
        assert!(author.posts.is_empty());
    }

    #[test]
    fn test_author_from_empty_params() {
        let author = Author::from_params(&Params::new());
        assert_eq!(author, Author::default());
    }

    #[test]
    fn test_author_relationships_resolve() {
        let author = Author {
            bio: Some(Bio::new(4, "Mobile Infantry")),
            ..Author::named("Rico")
        };

        assert_eq!(
            author.relationship("bio"),
            Some(Related::One(Some(ResourceIdentifier::new("bios", "4"))))
        );
        assert_eq!(author.relationship("posts"), Some(Related::Many(Vec::new())));
        assert_eq!(author.relationship("ships"), None);
    }
}
