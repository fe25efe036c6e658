//! Shared validation primitives
//!
//! Every entity funnels its invariant checks through [`fail_if`], so a
//! violation always surfaces as a [`DomainValidationError`] carrying the
//! description of the violated rule. Checks run in a fixed order per
//! operation: cheap local checks (empty, length) before relational checks
//! (foreign-key positivity), failing on the first violation.

use crate::errors::{DomainResult, DomainValidationError};

/// Fail with `message` when `violated` is true.
///
/// The assertion primitive used by the whole entity layer. It is always
/// called in the "this state is invalid" direction.
pub fn fail_if(violated: bool, message: impl Into<String>) -> DomainResult<()> {
    if violated {
        Err(DomainValidationError::new(message))
    } else {
        Ok(())
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Validate a store-assigned identifier. Identifiers are positive integers;
/// `field` names the offending field in the error message.
pub fn validate_id(value: i64, field: &str) -> DomainResult<()> {
    fail_if(value <= 0, format!("{field} must be a positive number"))
}

// ============================================================================
// Audit actors
// ============================================================================

/// Validate an audit actor name: non-empty, no surrounding whitespace,
/// 3-100 characters.
pub fn validate_actor(name: &str) -> DomainResult<()> {
    validate_actor_with_min(name, 3)
}

/// Validate a creator name where the entity requires at least 4 characters
/// (Recipe and RecipeIngredient).
pub fn validate_creator(name: &str) -> DomainResult<()> {
    validate_actor_with_min(name, 4)
}

fn validate_actor_with_min(name: &str, min: usize) -> DomainResult<()> {
    fail_if(name.trim().is_empty(), "actor name cannot be empty")?;
    fail_if(
        name != name.trim(),
        "actor name cannot have leading or trailing whitespace",
    )?;
    let len = name.chars().count();
    fail_if(
        len < min,
        format!("actor name must be at least {min} characters"),
    )?;
    fail_if(len > 100, "actor name must be at most 100 characters")
}

// ============================================================================
// Text fields
// ============================================================================

/// Validate a required text field against inclusive length bounds.
pub fn validate_text(field: &str, value: &str, min: usize, max: usize) -> DomainResult<()> {
    fail_if(value.trim().is_empty(), format!("{field} cannot be empty"))?;
    let len = value.chars().count();
    fail_if(
        len < min,
        format!("{field} must be at least {min} characters"),
    )?;
    fail_if(len > max, format!("{field} must be at most {max} characters"))
}

// ============================================================================
// Email
// ============================================================================

/// Validate email format: 4-254 characters, no embedded whitespace, a
/// local@domain shape where the domain contains an internal dot and does
/// not end with one.
pub fn validate_email(email: &str) -> DomainResult<()> {
    fail_if(email.is_empty(), "email cannot be empty")?;
    let len = email.chars().count();
    fail_if(len < 4, "email must be at least 4 characters")?;
    fail_if(len > 254, "email must be at most 254 characters")?;
    fail_if(
        email.chars().any(char::is_whitespace),
        "email cannot contain spaces",
    )?;
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    fail_if(!email_regex.is_match(email), "email is not a valid address")?;
    let domain = email.rsplit_once('@').map(|(_, d)| d).unwrap_or("");
    fail_if(domain.ends_with('.'), "email domain cannot end with a dot")?;
    fail_if(!domain.contains('.'), "email domain must contain a dot")
}

// ============================================================================
// Avatar
// ============================================================================

/// Validate an avatar reference: at most 500 characters, and when the value
/// looks like an HTTP(S) link it must parse as an absolute URL.
pub fn validate_avatar(avatar: &str) -> DomainResult<()> {
    fail_if(
        avatar.chars().count() > 500,
        "avatar must be at most 500 characters",
    )?;
    if avatar.starts_with("http://") || avatar.starts_with("https://") {
        fail_if(
            url::Url::parse(avatar).is_err(),
            "avatar must be a valid absolute URL",
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fail_if() {
        assert!(fail_if(false, "never raised").is_ok());
        let err = fail_if(true, "always raised").unwrap_err();
        assert_eq!(err.message(), "always raised");
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id(1, "user id").is_ok());
        assert!(validate_id(i64::MAX, "user id").is_ok());
        assert_eq!(
            validate_id(0, "user id").unwrap_err().message(),
            "user id must be a positive number"
        );
        assert!(validate_id(-5, "recipe id").is_err());
    }

    #[test]
    fn test_validate_actor() {
        assert!(validate_actor("bob").is_ok());
        assert!(validate_actor("admin").is_ok());
        assert!(validate_actor("").is_err());
        assert!(validate_actor("   ").is_err());
        assert!(validate_actor("ab").is_err());
        assert!(validate_actor(" admin").is_err());
        assert!(validate_actor("admin ").is_err());
        assert!(validate_actor(&"a".repeat(101)).is_err());
        assert!(validate_actor(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn test_validate_creator_needs_four_characters() {
        assert!(validate_creator("bob").is_err());
        assert!(validate_creator("john").is_ok());
    }

    #[test]
    fn test_validate_text() {
        assert!(validate_text("name", "abc", 3, 100).is_ok());
        assert!(validate_text("name", "ab", 3, 100).is_err());
        assert!(validate_text("name", "", 3, 100).is_err());
        assert!(validate_text("name", "    ", 1, 100).is_err());
        assert_eq!(
            validate_text("name", &"a".repeat(101), 3, 100)
                .unwrap_err()
                .message(),
            "name must be at most 100 characters"
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co.uk").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@dot").is_err());
        assert!(validate_email("spaces in@email.com").is_err());
        assert!(validate_email("trailing@dot.com.").is_err());
        assert!(validate_email(&format!("{}@example.com", "a".repeat(250))).is_err());
    }

    #[test]
    fn test_validate_avatar() {
        assert!(validate_avatar("avatars/default.png").is_ok());
        assert!(validate_avatar("https://cdn.example.com/a.png").is_ok());
        assert!(validate_avatar("http://cdn.example.com/a.png").is_ok());
        assert!(validate_avatar("https://no spaces allowed/a.png").is_err());
        assert!(validate_avatar(&"a".repeat(501)).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_positive_ids_accepted(id in 1i64..=i64::MAX) {
            prop_assert!(validate_id(id, "id").is_ok());
        }

        #[test]
        fn prop_non_positive_ids_rejected(id in i64::MIN..=0) {
            prop_assert!(validate_id(id, "id").is_err());
        }

        #[test]
        fn prop_text_in_bounds_accepted(len in 3usize..=100) {
            let value: String = (0..len).map(|_| 'x').collect();
            prop_assert!(validate_text("field", &value, 3, 100).is_ok());
        }

        #[test]
        fn prop_short_actor_rejected(len in 0usize..3) {
            let name: String = (0..len).map(|_| 'x').collect();
            prop_assert!(validate_actor(&name).is_err());
        }
    }
}
