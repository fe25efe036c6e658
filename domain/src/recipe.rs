//! Recipe entity

use serde::Serialize;

use crate::audit::AuditTrail;
use crate::errors::DomainResult;
use crate::validation::{validate_actor, validate_creator, validate_id, validate_text};

/// A published recipe, owned by a single user.
///
/// Ingredients, instructions, tags, likes, and nutrition data reference the
/// recipe by id; the recipe itself never needs them to validate.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    id: i64,
    name: String,
    description: String,
    instructions: String,
    user_id: i64,
    #[serde(flatten)]
    audit: AuditTrail,
}

fn validate_fields(name: &str, description: &str, instructions: &str) -> DomainResult<()> {
    validate_text("recipe name", name, 3, 100)?;
    validate_text("description", description, 25, 524)?;
    validate_text("instructions", instructions, 25, 600)
}

impl Recipe {
    /// Create a new recipe. The creator name must be at least 4 characters.
    pub fn new(
        name: &str,
        description: &str,
        instructions: &str,
        user_id: i64,
        created_by: &str,
    ) -> DomainResult<Self> {
        validate_fields(name, description, instructions)?;
        validate_id(user_id, "user id")?;
        validate_creator(created_by)?;
        let audit = AuditTrail::new(Some(created_by))?;
        Ok(Self {
            id: 0,
            name: name.to_owned(),
            description: description.to_owned(),
            instructions: instructions.to_owned(),
            user_id,
            audit,
        })
    }

    /// Rebuild a persisted recipe. Rejects non-positive ids.
    pub fn existing(
        id: i64,
        name: &str,
        description: &str,
        instructions: &str,
        user_id: i64,
        audit: AuditTrail,
    ) -> DomainResult<Self> {
        validate_id(id, "recipe id")?;
        validate_fields(name, description, instructions)?;
        validate_id(user_id, "user id")?;
        Ok(Self {
            id,
            name: name.to_owned(),
            description: description.to_owned(),
            instructions: instructions.to_owned(),
            user_id,
            audit,
        })
    }

    /// Replace name, description, and instruction text.
    pub fn update_details(
        &mut self,
        name: &str,
        description: &str,
        instructions: &str,
        actor: &str,
    ) -> DomainResult<()> {
        validate_actor(actor)?;
        validate_fields(name, description, instructions)?;
        self.name = name.to_owned();
        self.description = description.to_owned();
        self.instructions = instructions.to_owned();
        self.audit.mark_modified(actor)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DESCRIPTION: &str = "A rich chocolate cake for birthdays and parties.";
    const INSTRUCTIONS: &str = "Mix the dry ingredients, add the eggs, and bake for 40 minutes.";

    fn sample_recipe() -> Recipe {
        Recipe::new("Chocolate Cake", DESCRIPTION, INSTRUCTIONS, 1, "john").unwrap()
    }

    #[test]
    fn test_new_recipe_round_trip() {
        let recipe = sample_recipe();
        assert_eq!(recipe.id(), 0);
        assert_eq!(recipe.name(), "Chocolate Cake");
        assert_eq!(recipe.description(), DESCRIPTION);
        assert_eq!(recipe.instructions(), INSTRUCTIONS);
        assert_eq!(recipe.user_id(), 1);
        assert_eq!(recipe.audit().created_by(), Some("john"));
    }

    #[rstest]
    #[case::name_too_short("ab", DESCRIPTION, INSTRUCTIONS)]
    #[case::description_too_short("Cake", "too short", INSTRUCTIONS)]
    #[case::instructions_too_short("Cake", DESCRIPTION, "mix and bake")]
    fn test_rejects_out_of_bounds_text(
        #[case] name: &str,
        #[case] description: &str,
        #[case] instructions: &str,
    ) {
        assert!(Recipe::new(name, description, instructions, 1, "john").is_err());
    }

    #[test]
    fn test_rejects_non_positive_owner() {
        assert!(Recipe::new("Cake", DESCRIPTION, INSTRUCTIONS, 0, "john").is_err());
        assert!(Recipe::new("Cake", DESCRIPTION, INSTRUCTIONS, -1, "john").is_err());
    }

    #[test]
    fn test_rejects_short_creator_name() {
        let err = Recipe::new("Cake", DESCRIPTION, INSTRUCTIONS, 1, "bob").unwrap_err();
        assert_eq!(err.message(), "actor name must be at least 4 characters");
    }

    #[test]
    fn test_update_details() {
        let mut recipe = sample_recipe();
        let new_description = "A lighter sponge cake with vanilla frosting on top.";
        recipe
            .update_details("Vanilla Cake", new_description, INSTRUCTIONS, "jane")
            .unwrap();
        assert_eq!(recipe.name(), "Vanilla Cake");
        assert_eq!(recipe.description(), new_description);
        assert_eq!(recipe.audit().modified_by(), Some("jane"));
    }

    #[test]
    fn test_failed_update_leaves_state_unchanged() {
        let mut recipe = sample_recipe();
        assert!(recipe
            .update_details("ab", DESCRIPTION, INSTRUCTIONS, "jane")
            .is_err());
        assert_eq!(recipe.name(), "Chocolate Cake");
        assert_eq!(recipe.audit().modified_by(), None);
    }

    #[test]
    fn test_existing_requires_positive_id() {
        let audit = AuditTrail::new(Some("john")).unwrap();
        assert!(Recipe::existing(-3, "Cake", DESCRIPTION, INSTRUCTIONS, 1, audit).is_err());
    }
}
