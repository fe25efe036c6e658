//! Like association entities
//!
//! A like is identified by its (subject id, user id) business key: two
//! in-memory instances built from the same pair are interchangeable, which
//! lets callers detect duplicate likes without a storage round trip.
//! Persistent uniqueness of the pair remains the storage layer's concern.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::audit::AuditTrail;
use crate::errors::DomainResult;
use crate::validation::validate_id;

/// A user's like on a recipe.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeLike {
    id: i64,
    recipe_id: i64,
    user_id: i64,
    #[serde(flatten)]
    audit: AuditTrail,
}

impl RecipeLike {
    pub fn new(recipe_id: i64, user_id: i64) -> DomainResult<Self> {
        validate_id(recipe_id, "recipe id")?;
        validate_id(user_id, "user id")?;
        let audit = AuditTrail::new(None)?;
        Ok(Self {
            id: 0,
            recipe_id,
            user_id,
            audit,
        })
    }

    /// Rebuild a persisted like. Rejects non-positive ids.
    pub fn existing(id: i64, recipe_id: i64, user_id: i64, audit: AuditTrail) -> DomainResult<Self> {
        validate_id(id, "like id")?;
        validate_id(recipe_id, "recipe id")?;
        validate_id(user_id, "user id")?;
        Ok(Self {
            id,
            recipe_id,
            user_id,
            audit,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn recipe_id(&self) -> i64 {
        self.recipe_id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}

impl PartialEq for RecipeLike {
    fn eq(&self, other: &Self) -> bool {
        self.recipe_id == other.recipe_id && self.user_id == other.user_id
    }
}

impl Eq for RecipeLike {}

impl Hash for RecipeLike {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.recipe_id, self.user_id).hash(state);
    }
}

/// A user's like on a comment.
#[derive(Debug, Clone, Serialize)]
pub struct CommentLike {
    id: i64,
    comment_id: i64,
    user_id: i64,
    #[serde(flatten)]
    audit: AuditTrail,
}

impl CommentLike {
    pub fn new(comment_id: i64, user_id: i64) -> DomainResult<Self> {
        validate_id(comment_id, "comment id")?;
        validate_id(user_id, "user id")?;
        let audit = AuditTrail::new(None)?;
        Ok(Self {
            id: 0,
            comment_id,
            user_id,
            audit,
        })
    }

    /// Rebuild a persisted like. Rejects non-positive ids.
    pub fn existing(
        id: i64,
        comment_id: i64,
        user_id: i64,
        audit: AuditTrail,
    ) -> DomainResult<Self> {
        validate_id(id, "like id")?;
        validate_id(comment_id, "comment id")?;
        validate_id(user_id, "user id")?;
        Ok(Self {
            id,
            comment_id,
            user_id,
            audit,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn comment_id(&self) -> i64 {
        self.comment_id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}

impl PartialEq for CommentLike {
    fn eq(&self, other: &Self) -> bool {
        self.comment_id == other.comment_id && self.user_id == other.user_id
    }
}

impl Eq for CommentLike {}

impl Hash for CommentLike {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.comment_id, self.user_id).hash(state);
    }
}
