//! Comment entity
//!
//! A comment belongs to one recipe and one user. A comment carrying a
//! parent id is a reply; replies live in the parent's owned collection and
//! must reference the same recipe as the parent.

use serde::Serialize;

use crate::audit::AuditTrail;
use crate::errors::{DomainResult, DomainValidationError};
use crate::validation::{fail_if, validate_actor, validate_id, validate_text};

/// A comment on a recipe, optionally a reply to another comment.
/// Content is stored trimmed.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    id: i64,
    content: String,
    user_id: i64,
    recipe_id: i64,
    parent_comment_id: Option<i64>,
    replies: Vec<Comment>,
    #[serde(flatten)]
    audit: AuditTrail,
}

fn validate_content(content: &str) -> DomainResult<()> {
    validate_text("comment content", content, 1, 521)
}

impl Comment {
    /// Create a top-level comment.
    pub fn new(content: &str, user_id: i64, recipe_id: i64) -> DomainResult<Self> {
        Self::build(content, user_id, recipe_id, None)
    }

    /// Create a reply to the comment identified by `parent_comment_id`.
    pub fn reply(
        content: &str,
        user_id: i64,
        recipe_id: i64,
        parent_comment_id: i64,
    ) -> DomainResult<Self> {
        Self::build(content, user_id, recipe_id, Some(parent_comment_id))
    }

    fn build(
        content: &str,
        user_id: i64,
        recipe_id: i64,
        parent_comment_id: Option<i64>,
    ) -> DomainResult<Self> {
        let content = content.trim();
        validate_content(content)?;
        validate_id(user_id, "user id")?;
        validate_id(recipe_id, "recipe id")?;
        if let Some(parent_id) = parent_comment_id {
            validate_id(parent_id, "parent comment id")?;
        }
        let audit = AuditTrail::new(None)?;
        Ok(Self {
            id: 0,
            content: content.to_owned(),
            user_id,
            recipe_id,
            parent_comment_id,
            replies: Vec::new(),
            audit,
        })
    }

    /// Rebuild a persisted comment together with its already-valid replies.
    /// Rejects non-positive ids and replies that reference another recipe;
    /// does not restamp the audit trail.
    pub fn existing(
        id: i64,
        content: &str,
        user_id: i64,
        recipe_id: i64,
        parent_comment_id: Option<i64>,
        replies: Vec<Comment>,
        audit: AuditTrail,
    ) -> DomainResult<Self> {
        validate_id(id, "comment id")?;
        let content = content.trim();
        validate_content(content)?;
        validate_id(user_id, "user id")?;
        validate_id(recipe_id, "recipe id")?;
        if let Some(parent_id) = parent_comment_id {
            validate_id(parent_id, "parent comment id")?;
        }
        fail_if(
            replies.iter().any(|r| r.recipe_id != recipe_id),
            "reply must belong to the same recipe as its parent comment",
        )?;
        Ok(Self {
            id,
            content: content.to_owned(),
            user_id,
            recipe_id,
            parent_comment_id,
            replies,
            audit,
        })
    }

    /// Attach a reply. The reply must reference the same recipe as this
    /// comment.
    pub fn add_reply(&mut self, reply: Comment, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        fail_if(
            reply.recipe_id != self.recipe_id,
            "reply must belong to the same recipe as its parent comment",
        )?;
        self.replies.push(reply);
        self.audit.mark_modified(actor)
    }

    /// Detach the reply with the given id.
    pub fn remove_reply(&mut self, comment_id: i64, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        let Some(index) = self.replies.iter().position(|r| r.id == comment_id) else {
            return Err(DomainValidationError::new("reply does not exist"));
        };
        self.replies.remove(index);
        self.audit.mark_modified(actor)
    }

    pub fn update_content(&mut self, content: &str, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        let content = content.trim();
        validate_content(content)?;
        self.content = content.to_owned();
        self.audit.mark_modified(actor)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn recipe_id(&self) -> i64 {
        self.recipe_id
    }

    pub fn parent_comment_id(&self) -> Option<i64> {
        self.parent_comment_id
    }

    pub fn is_reply(&self) -> bool {
        self.parent_comment_id.is_some()
    }

    /// Read-only view of the attached replies.
    pub fn replies(&self) -> &[Comment] {
        &self.replies
    }

    pub fn replies_count(&self) -> usize {
        self.replies.len()
    }

    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}
