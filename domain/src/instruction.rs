//! Instruction (recipe step) entity

use serde::Serialize;

use crate::audit::AuditTrail;
use crate::errors::DomainResult;
use crate::validation::{fail_if, validate_actor, validate_id, validate_text};

/// A numbered preparation step belonging to one recipe.
#[derive(Debug, Clone, Serialize)]
pub struct Instruction {
    id: i64,
    step_number: i32,
    content: String,
    recipe_id: i64,
    #[serde(flatten)]
    audit: AuditTrail,
}

fn validate_content(content: &str) -> DomainResult<()> {
    validate_text("instruction content", content, 8, 600)
}

fn validate_step_number(step_number: i32) -> DomainResult<()> {
    fail_if(
        !(1..=100).contains(&step_number),
        "step number must be between 1 and 100",
    )
}

impl Instruction {
    pub fn new(step_number: i32, content: &str, recipe_id: i64) -> DomainResult<Self> {
        validate_content(content)?;
        validate_step_number(step_number)?;
        validate_id(recipe_id, "recipe id")?;
        let audit = AuditTrail::new(None)?;
        Ok(Self {
            id: 0,
            step_number,
            content: content.to_owned(),
            recipe_id,
            audit,
        })
    }

    /// Rebuild a persisted instruction. Rejects non-positive ids.
    pub fn existing(
        id: i64,
        step_number: i32,
        content: &str,
        recipe_id: i64,
        audit: AuditTrail,
    ) -> DomainResult<Self> {
        validate_id(id, "instruction id")?;
        validate_content(content)?;
        validate_step_number(step_number)?;
        validate_id(recipe_id, "recipe id")?;
        Ok(Self {
            id,
            step_number,
            content: content.to_owned(),
            recipe_id,
            audit,
        })
    }

    pub fn update_content(&mut self, content: &str, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        validate_content(content)?;
        self.content = content.to_owned();
        self.audit.mark_modified(actor)
    }

    /// Move the step to a different position.
    pub fn reorder(&mut self, step_number: i32, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        validate_step_number(step_number)?;
        self.step_number = step_number;
        self.audit.mark_modified(actor)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn step_number(&self) -> i32 {
        self.step_number
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn recipe_id(&self) -> i64 {
        self.recipe_id
    }

    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}
