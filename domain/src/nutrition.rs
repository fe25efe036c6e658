//! Nutrition information entity
//!
//! One-to-one with a recipe: a single row of macronutrient totals. Each
//! component is non-negative and individually capped.

use serde::Serialize;

use crate::audit::AuditTrail;
use crate::errors::DomainResult;
use crate::validation::{fail_if, validate_actor, validate_id};

/// Macronutrient totals for one recipe.
#[derive(Debug, Clone, Serialize)]
pub struct NutritionInfo {
    id: i64,
    calories: f64,
    proteins: f64,
    carbohydrates: f64,
    fat: f64,
    recipe_id: i64,
    #[serde(flatten)]
    audit: AuditTrail,
}

fn validate_component(field: &str, value: f64, max: f64) -> DomainResult<()> {
    fail_if(
        value.is_nan() || value.is_infinite(),
        format!("{field} must be a valid number"),
    )?;
    fail_if(value < 0.0, format!("{field} cannot be negative"))?;
    fail_if(value > max, format!("{field} must be at most {max}"))
}

fn validate_components(calories: f64, proteins: f64, carbohydrates: f64, fat: f64) -> DomainResult<()> {
    validate_component("calories", calories, 10000.0)?;
    validate_component("proteins", proteins, 1000.0)?;
    validate_component("carbohydrates", carbohydrates, 2000.0)?;
    validate_component("fat", fat, 1000.0)
}

impl NutritionInfo {
    pub fn new(
        calories: f64,
        proteins: f64,
        carbohydrates: f64,
        fat: f64,
        recipe_id: i64,
    ) -> DomainResult<Self> {
        validate_components(calories, proteins, carbohydrates, fat)?;
        validate_id(recipe_id, "recipe id")?;
        let audit = AuditTrail::new(None)?;
        Ok(Self {
            id: 0,
            calories,
            proteins,
            carbohydrates,
            fat,
            recipe_id,
            audit,
        })
    }

    /// Rebuild persisted nutrition data. Rejects non-positive ids.
    pub fn existing(
        id: i64,
        calories: f64,
        proteins: f64,
        carbohydrates: f64,
        fat: f64,
        recipe_id: i64,
        audit: AuditTrail,
    ) -> DomainResult<Self> {
        validate_id(id, "nutrition id")?;
        validate_components(calories, proteins, carbohydrates, fat)?;
        validate_id(recipe_id, "recipe id")?;
        Ok(Self {
            id,
            calories,
            proteins,
            carbohydrates,
            fat,
            recipe_id,
            audit,
        })
    }

    /// Replace all four macronutrient values.
    pub fn update_values(
        &mut self,
        calories: f64,
        proteins: f64,
        carbohydrates: f64,
        fat: f64,
        actor: &str,
    ) -> DomainResult<()> {
        validate_actor(actor)?;
        validate_components(calories, proteins, carbohydrates, fat)?;
        self.calories = calories;
        self.proteins = proteins;
        self.carbohydrates = carbohydrates;
        self.fat = fat;
        self.audit.mark_modified(actor)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    pub fn proteins(&self) -> f64 {
        self.proteins
    }

    pub fn carbohydrates(&self) -> f64 {
        self.carbohydrates
    }

    pub fn fat(&self) -> f64 {
        self.fat
    }

    pub fn recipe_id(&self) -> i64 {
        self.recipe_id
    }

    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_new_round_trip() {
        let info = NutritionInfo::new(450.0, 12.5, 60.0, 18.0, 1).unwrap();
        assert_eq!(info.calories(), 450.0);
        assert_eq!(info.proteins(), 12.5);
        assert_eq!(info.carbohydrates(), 60.0);
        assert_eq!(info.fat(), 18.0);
        assert_eq!(info.recipe_id(), 1);
    }

    #[rstest]
    #[case::negative_calories(-1.0, 0.0, 0.0, 0.0)]
    #[case::calories_over_cap(10001.0, 0.0, 0.0, 0.0)]
    #[case::proteins_over_cap(0.0, 1001.0, 0.0, 0.0)]
    #[case::carbs_over_cap(0.0, 0.0, 2001.0, 0.0)]
    #[case::fat_over_cap(0.0, 0.0, 0.0, 1001.0)]
    #[case::nan_calories(f64::NAN, 0.0, 0.0, 0.0)]
    #[case::infinite_fat(0.0, 0.0, 0.0, f64::INFINITY)]
    fn test_rejects_out_of_range_components(
        #[case] calories: f64,
        #[case] proteins: f64,
        #[case] carbohydrates: f64,
        #[case] fat: f64,
    ) {
        assert!(NutritionInfo::new(calories, proteins, carbohydrates, fat, 1).is_err());
    }

    #[test]
    fn test_caps_are_inclusive() {
        assert!(NutritionInfo::new(10000.0, 1000.0, 2000.0, 1000.0, 1).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_recipe() {
        assert!(NutritionInfo::new(100.0, 1.0, 1.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_update_values() {
        let mut info = NutritionInfo::new(450.0, 12.5, 60.0, 18.0, 1).unwrap();
        info.update_values(500.0, 15.0, 55.0, 20.0, "john").unwrap();
        assert_eq!(info.calories(), 500.0);
        assert_eq!(info.audit().modified_by(), Some("john"));

        assert!(info.update_values(-1.0, 15.0, 55.0, 20.0, "john").is_err());
        assert_eq!(info.calories(), 500.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_components_in_range_accepted(
            calories in 0.0f64..=10000.0,
            proteins in 0.0f64..=1000.0,
            carbohydrates in 0.0f64..=2000.0,
            fat in 0.0f64..=1000.0,
        ) {
            prop_assert!(NutritionInfo::new(calories, proteins, carbohydrates, fat, 1).is_ok());
        }

        #[test]
        fn prop_negative_components_rejected(value in -10000.0f64..0.0) {
            prop_assert!(NutritionInfo::new(value, 0.0, 0.0, 0.0, 1).is_err());
            prop_assert!(NutritionInfo::new(0.0, value, 0.0, 0.0, 1).is_err());
            prop_assert!(NutritionInfo::new(0.0, 0.0, value, 0.0, 1).is_err());
            prop_assert!(NutritionInfo::new(0.0, 0.0, 0.0, value, 1).is_err());
        }
    }
}
