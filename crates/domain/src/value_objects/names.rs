//! Validated name newtypes for domain entities
//!
//! Names are valid by construction: non-empty, within length limits, and
//! trimmed of leading/trailing whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for an investigator name
const MAX_NAME_LENGTH: usize = 200;

/// A validated investigator name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InvestigatorName(String);

impl InvestigatorName {
    /// Create a new validated investigator name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Investigator name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Investigator name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvestigatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for InvestigatorName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<InvestigatorName> for String {
    fn from(name: InvestigatorName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name_is_trimmed() {
        let name = InvestigatorName::new("  Arthur Blackwood  ").expect("valid");
        assert_eq!(name.as_str(), "Arthur Blackwood");
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(InvestigatorName::new("   ").is_err());
    }

    #[test]
    fn overlong_name_is_rejected() {
        assert!(InvestigatorName::new("x".repeat(201)).is_err());
    }

    #[test]
    fn serde_roundtrip_via_string() {
        let name = InvestigatorName::new("Eleanor Vance").expect("valid");
        let json = serde_json::to_string(&name).expect("serialize");
        assert_eq!(json, "\"Eleanor Vance\"");
        let back: InvestigatorName = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, name);
    }

    #[test]
    fn serde_rejects_empty_string() {
        let result: Result<InvestigatorName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
