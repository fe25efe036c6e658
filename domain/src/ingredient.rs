//! Ingredient entity

use serde::Serialize;

use crate::audit::AuditTrail;
use crate::errors::DomainResult;
use crate::validation::{validate_actor, validate_id, validate_text};

/// An ingredient belonging to one recipe. Names are stored trimmed.
#[derive(Debug, Clone, Serialize)]
pub struct Ingredient {
    id: i64,
    name: String,
    recipe_id: i64,
    #[serde(flatten)]
    audit: AuditTrail,
}

fn validate_name(name: &str) -> DomainResult<()> {
    validate_text("ingredient name", name, 2, 100)
}

impl Ingredient {
    pub fn new(name: &str, recipe_id: i64) -> DomainResult<Self> {
        let name = name.trim();
        validate_name(name)?;
        validate_id(recipe_id, "recipe id")?;
        let audit = AuditTrail::new(None)?;
        Ok(Self {
            id: 0,
            name: name.to_owned(),
            recipe_id,
            audit,
        })
    }

    /// Rebuild a persisted ingredient. Rejects non-positive ids.
    pub fn existing(id: i64, name: &str, recipe_id: i64, audit: AuditTrail) -> DomainResult<Self> {
        validate_id(id, "ingredient id")?;
        let name = name.trim();
        validate_name(name)?;
        validate_id(recipe_id, "recipe id")?;
        Ok(Self {
            id,
            name: name.to_owned(),
            recipe_id,
            audit,
        })
    }

    pub fn rename(&mut self, name: &str, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        let name = name.trim();
        validate_name(name)?;
        self.name = name.to_owned();
        self.audit.mark_modified(actor)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn recipe_id(&self) -> i64 {
        self.recipe_id
    }

    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}
