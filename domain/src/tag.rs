//! Tag and recipe-tag association entities
//!
//! Tag equality is computed on the normalized title (trimmed, lower-cased)
//! so differently-cased or differently-spaced titles naming the same tag
//! compare equal. RecipeTag compares on its (tag id, recipe id) business
//! key, ignoring surrogate id and audit fields.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::audit::AuditTrail;
use crate::errors::DomainResult;
use crate::validation::{validate_actor, validate_id, validate_text};

/// A recipe tag. Titles are stored trimmed.
#[derive(Debug, Clone, Serialize)]
pub struct Tag {
    id: i64,
    title: String,
    #[serde(flatten)]
    audit: AuditTrail,
}

fn normalize(title: &str) -> String {
    title.trim().to_lowercase()
}

fn validate_title(title: &str) -> DomainResult<()> {
    validate_text("tag title", title, 2, 128)
}

impl Tag {
    pub fn new(title: &str) -> DomainResult<Self> {
        let title = title.trim();
        validate_title(title)?;
        let audit = AuditTrail::new(None)?;
        Ok(Self {
            id: 0,
            title: title.to_owned(),
            audit,
        })
    }

    /// Rebuild a persisted tag. Rejects non-positive ids.
    pub fn existing(id: i64, title: &str, audit: AuditTrail) -> DomainResult<Self> {
        validate_id(id, "tag id")?;
        let title = title.trim();
        validate_title(title)?;
        Ok(Self {
            id,
            title: title.to_owned(),
            audit,
        })
    }

    pub fn rename(&mut self, title: &str, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        let title = title.trim();
        validate_title(title)?;
        self.title = title.to_owned();
        self.audit.mark_modified(actor)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        normalize(&self.title) == normalize(&other.title)
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        normalize(&self.title).hash(state);
    }
}

/// Association between a tag and a recipe.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeTag {
    id: i64,
    tag_id: i64,
    recipe_id: i64,
    #[serde(flatten)]
    audit: AuditTrail,
}

impl RecipeTag {
    pub fn new(tag_id: i64, recipe_id: i64) -> DomainResult<Self> {
        validate_id(tag_id, "tag id")?;
        validate_id(recipe_id, "recipe id")?;
        let audit = AuditTrail::new(None)?;
        Ok(Self {
            id: 0,
            tag_id,
            recipe_id,
            audit,
        })
    }

    /// Rebuild a persisted association. Rejects non-positive ids.
    pub fn existing(id: i64, tag_id: i64, recipe_id: i64, audit: AuditTrail) -> DomainResult<Self> {
        validate_id(id, "recipe tag id")?;
        validate_id(tag_id, "tag id")?;
        validate_id(recipe_id, "recipe id")?;
        Ok(Self {
            id,
            tag_id,
            recipe_id,
            audit,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn tag_id(&self) -> i64 {
        self.tag_id
    }

    pub fn recipe_id(&self) -> i64 {
        self.recipe_id
    }

    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}

impl PartialEq for RecipeTag {
    fn eq(&self, other: &Self) -> bool {
        self.tag_id == other.tag_id && self.recipe_id == other.recipe_id
    }
}

impl Eq for RecipeTag {}

impl Hash for RecipeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.tag_id, self.recipe_id).hash(state);
    }
}
