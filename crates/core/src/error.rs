//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (duplicate
/// keys, missing records, validation). IO and serialization failures belong to
/// the storage layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity with the same identifier is already present.
    #[error("Product with ID {0} already exists.")]
    DuplicateKey(String),

    /// The requested entity does not exist.
    #[error("Product with ID {0} not found.")]
    NotFound(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn duplicate_key(id: impl core::fmt::Display) -> Self {
        Self::DuplicateKey(id.to_string())
    }

    pub fn not_found(id: impl core::fmt::Display) -> Self {
        Self::NotFound(id.to_string())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_id() {
        assert_eq!(
            DomainError::duplicate_key("A1").to_string(),
            "Product with ID A1 already exists."
        );
        assert_eq!(
            DomainError::not_found("B2").to_string(),
            "Product with ID B2 not found."
        );
    }

    #[test]
    fn validation_wraps_message() {
        let err = DomainError::validation("price must be positive");
        assert_eq!(err, DomainError::Validation("price must be positive".to_string()));
    }
}
