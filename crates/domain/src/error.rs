//! Unified error types for the domain layer
//!
//! Provides a common error type used across all domain operations, so the
//! engine layer never has to fall back to String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A characteristic or age value outside its valid domain
    #[error("Invalid value for {name}: {value} (expected {expected})")]
    InvalidAttribute {
        name: String,
        value: i64,
        expected: &'static str,
    },

    /// Occupation name not present in the reference catalog
    #[error("Unknown occupation: {0}")]
    UnknownOccupation(String),

    /// Skill name not present in the reference catalog or on the sheet
    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants or constraints are violated:
    /// - Required fields are empty or missing
    /// - Values are outside allowed ranges
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid attribute error for out-of-domain characteristic
    /// or age inputs. Checked at the mutation boundary; the pure
    /// calculators assume validated input.
    pub fn invalid_attribute(
        name: impl Into<String>,
        value: i64,
        expected: &'static str,
    ) -> Self {
        Self::InvalidAttribute {
            name: name.into(),
            value,
            expected,
        }
    }

    /// Create an unknown occupation error
    pub fn unknown_occupation(name: impl Into<String>) -> Self {
        Self::UnknownOccupation(name.into())
    }

    /// Create an unknown skill error
    pub fn unknown_skill(name: impl Into<String>) -> Self {
        Self::UnknownSkill(name.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_invalid_attribute_error() {
        let err = DomainError::invalid_attribute("STR", 120, "0..=99");
        assert!(matches!(err, DomainError::InvalidAttribute { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid value for STR: 120 (expected 0..=99)"
        );
    }

    #[test]
    fn test_unknown_occupation_error() {
        let err = DomainError::unknown_occupation("Astronaut");
        assert_eq!(err.to_string(), "Unknown occupation: Astronaut");
    }

    #[test]
    fn test_unknown_skill_error() {
        let err = DomainError::unknown_skill("Basket Weaving");
        assert_eq!(err.to_string(), "Unknown skill: Basket Weaving");
    }

    #[test]
    fn test_invalid_state_transition_error() {
        let err = DomainError::invalid_state_transition("sheet already in play");
        assert_eq!(
            err.to_string(),
            "Invalid state transition: sheet already in play"
        );
    }
}
