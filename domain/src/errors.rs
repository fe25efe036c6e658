//! Error types for the recipe-sharing domain layer

use thiserror::Error;

/// The single error kind raised when an entity invariant is violated.
///
/// Carries one human-readable message naming the violated rule. A violation
/// is reported at the first failing check and surfaces directly to the
/// caller; the service layer translates it into a client-facing error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DomainValidationError {
    message: String,
}

impl DomainValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Description of the violated rule.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type returned by every constructor and update operation.
pub type DomainResult<T> = Result<T, DomainValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_the_message() {
        let err = DomainValidationError::new("quantity must be greater than zero");
        assert_eq!(err.to_string(), "quantity must be greater than zero");
        assert_eq!(err.message(), "quantity must be greater than zero");
    }
}
