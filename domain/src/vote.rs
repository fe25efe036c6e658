//! Vote entity

use serde::Serialize;

use crate::audit::AuditTrail;
use crate::errors::DomainResult;
use crate::validation::{validate_actor, validate_id};

/// A user's up/down vote on a recipe. The vote direction is mutable
/// through [`Vote::change_vote`].
#[derive(Debug, Clone, Serialize)]
pub struct Vote {
    id: i64,
    user_id: i64,
    recipe_id: i64,
    is_upvote: bool,
    #[serde(flatten)]
    audit: AuditTrail,
}

impl Vote {
    pub fn new(user_id: i64, recipe_id: i64, is_upvote: bool) -> DomainResult<Self> {
        Self::build(user_id, recipe_id, is_upvote, None)
    }

    /// Create a vote with an explicit creator actor.
    pub fn with_creator(
        user_id: i64,
        recipe_id: i64,
        is_upvote: bool,
        created_by: &str,
    ) -> DomainResult<Self> {
        Self::build(user_id, recipe_id, is_upvote, Some(created_by))
    }

    fn build(
        user_id: i64,
        recipe_id: i64,
        is_upvote: bool,
        created_by: Option<&str>,
    ) -> DomainResult<Self> {
        validate_id(user_id, "user id")?;
        validate_id(recipe_id, "recipe id")?;
        let audit = AuditTrail::new(created_by)?;
        Ok(Self {
            id: 0,
            user_id,
            recipe_id,
            is_upvote,
            audit,
        })
    }

    /// Rebuild a persisted vote. Rejects non-positive ids.
    pub fn existing(
        id: i64,
        user_id: i64,
        recipe_id: i64,
        is_upvote: bool,
        audit: AuditTrail,
    ) -> DomainResult<Self> {
        validate_id(id, "vote id")?;
        validate_id(user_id, "user id")?;
        validate_id(recipe_id, "recipe id")?;
        Ok(Self {
            id,
            user_id,
            recipe_id,
            is_upvote,
            audit,
        })
    }

    /// Flip or restate the vote direction.
    pub fn change_vote(&mut self, is_upvote: bool, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        self.is_upvote = is_upvote;
        self.audit.mark_modified(actor)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn recipe_id(&self) -> i64 {
        self.recipe_id
    }

    pub fn is_upvote(&self) -> bool {
        self.is_upvote
    }

    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}
