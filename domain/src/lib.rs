//! RecipeShare Domain Library
//!
//! This crate contains the self-validating business entities of the
//! recipe-sharing platform: users, recipes, ingredients, instructions,
//! tags, comments, likes, votes, and nutrition data.
//!
//! Every entity enforces its own invariants on construction and on each
//! named update operation. The persistence and transport layers consume
//! already-valid objects and must never bypass the validating constructors.

pub mod audit;
pub mod comment;
pub mod errors;
pub mod ingredient;
pub mod instruction;
pub mod likes;
pub mod nutrition;
pub mod recipe;
pub mod recipe_ingredient;
pub mod tag;
pub mod user;
pub mod validation;
pub mod vote;

// Re-export commonly used items
pub use audit::AuditTrail;
pub use comment::Comment;
pub use errors::{DomainResult, DomainValidationError};
pub use ingredient::Ingredient;
pub use instruction::Instruction;
pub use likes::{CommentLike, RecipeLike};
pub use nutrition::NutritionInfo;
pub use recipe::Recipe;
pub use recipe_ingredient::{RecipeIngredient, UnitOfMeasure};
pub use tag::{RecipeTag, Tag};
pub use user::{User, UserStatus};
pub use vote::Vote;
