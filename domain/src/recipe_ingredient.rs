//! Recipe-ingredient association entity
//!
//! Binds an ingredient to a recipe with an exact decimal quantity and a
//! unit of measure drawn from a closed enumeration.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::audit::AuditTrail;
use crate::errors::{DomainResult, DomainValidationError};
use crate::validation::{fail_if, validate_actor, validate_creator, validate_id};

// ============================================================================
// Units
// ============================================================================

/// Unit of measure for a recipe ingredient quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfMeasure {
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Teaspoon,
    Tablespoon,
    Cup,
    Piece,
    Slice,
    Pinch,
}

impl UnitOfMeasure {
    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            UnitOfMeasure::Gram => "g",
            UnitOfMeasure::Kilogram => "kg",
            UnitOfMeasure::Milliliter => "ml",
            UnitOfMeasure::Liter => "l",
            UnitOfMeasure::Teaspoon => "tsp",
            UnitOfMeasure::Tablespoon => "tbsp",
            UnitOfMeasure::Cup => "cup",
            UnitOfMeasure::Piece => "pc",
            UnitOfMeasure::Slice => "slice",
            UnitOfMeasure::Pinch => "pinch",
        }
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for UnitOfMeasure {
    type Err = DomainValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(UnitOfMeasure::Gram),
            "kg" | "kilogram" | "kilograms" => Ok(UnitOfMeasure::Kilogram),
            "ml" | "milliliter" | "milliliters" => Ok(UnitOfMeasure::Milliliter),
            "l" | "liter" | "liters" => Ok(UnitOfMeasure::Liter),
            "tsp" | "teaspoon" | "teaspoons" => Ok(UnitOfMeasure::Teaspoon),
            "tbsp" | "tablespoon" | "tablespoons" => Ok(UnitOfMeasure::Tablespoon),
            "cup" | "cups" => Ok(UnitOfMeasure::Cup),
            "pc" | "piece" | "pieces" => Ok(UnitOfMeasure::Piece),
            "slice" | "slices" => Ok(UnitOfMeasure::Slice),
            "pinch" | "pinches" => Ok(UnitOfMeasure::Pinch),
            _ => Err(DomainValidationError::new(format!(
                "unknown unit of measure: {s}"
            ))),
        }
    }
}

// ============================================================================
// RecipeIngredient
// ============================================================================

/// One ingredient line of a recipe: how much of which ingredient.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeIngredient {
    id: i64,
    recipe_id: i64,
    ingredient_id: i64,
    quantity: Decimal,
    unit: UnitOfMeasure,
    #[serde(flatten)]
    audit: AuditTrail,
}

fn validate_quantity(quantity: Decimal) -> DomainResult<()> {
    fail_if(
        quantity <= Decimal::ZERO,
        "quantity must be greater than zero",
    )
}

impl RecipeIngredient {
    /// Create a new ingredient line. The creator name must be at least 4
    /// characters.
    pub fn new(
        recipe_id: i64,
        ingredient_id: i64,
        quantity: Decimal,
        unit: UnitOfMeasure,
        created_by: &str,
    ) -> DomainResult<Self> {
        validate_quantity(quantity)?;
        validate_id(recipe_id, "recipe id")?;
        validate_id(ingredient_id, "ingredient id")?;
        validate_creator(created_by)?;
        let audit = AuditTrail::new(Some(created_by))?;
        Ok(Self {
            id: 0,
            recipe_id,
            ingredient_id,
            quantity,
            unit,
            audit,
        })
    }

    /// Rebuild a persisted ingredient line. Rejects non-positive ids.
    pub fn existing(
        id: i64,
        recipe_id: i64,
        ingredient_id: i64,
        quantity: Decimal,
        unit: UnitOfMeasure,
        audit: AuditTrail,
    ) -> DomainResult<Self> {
        validate_id(id, "recipe ingredient id")?;
        validate_quantity(quantity)?;
        validate_id(recipe_id, "recipe id")?;
        validate_id(ingredient_id, "ingredient id")?;
        Ok(Self {
            id,
            recipe_id,
            ingredient_id,
            quantity,
            unit,
            audit,
        })
    }

    pub fn update_quantity(&mut self, quantity: Decimal, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        validate_quantity(quantity)?;
        self.quantity = quantity;
        self.audit.mark_modified(actor)
    }

    pub fn change_unit(&mut self, unit: UnitOfMeasure, actor: &str) -> DomainResult<()> {
        validate_actor(actor)?;
        self.unit = unit;
        self.audit.mark_modified(actor)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn recipe_id(&self) -> i64 {
        self.recipe_id
    }

    pub fn ingredient_id(&self) -> i64 {
        self.ingredient_id
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit(&self) -> UnitOfMeasure {
        self.unit
    }

    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }
}
