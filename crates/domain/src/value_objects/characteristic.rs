//! Characteristic value objects - the nine primary percentile scores.
//!
//! Provides type safety for characteristic references instead of magic
//! strings like "STR", "DEX".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Highest legal value for a characteristic (percentile scale).
pub const CHARACTERISTIC_MAX: u8 = 99;

/// The nine primary investigator characteristics.
///
/// All nine are always present on a sheet; there are no optional members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Characteristic {
    /// Strength - physical power
    Str,
    /// Constitution - health and resilience
    Con,
    /// Size - physical mass
    Siz,
    /// Dexterity - agility and coordination
    Dex,
    /// Appearance - physical attractiveness
    App,
    /// Intelligence - learning and reasoning
    Int,
    /// Power - willpower and magical potential
    Pow,
    /// Education - formal and life knowledge
    Edu,
    /// Luck - expendable fortune
    Luck,
}

impl Characteristic {
    /// Returns the short uppercase string representation (e.g., "STR").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Con => "CON",
            Self::Siz => "SIZ",
            Self::Dex => "DEX",
            Self::App => "APP",
            Self::Int => "INT",
            Self::Pow => "POW",
            Self::Edu => "EDU",
            Self::Luck => "LUCK",
        }
    }

    /// Returns the full name of the characteristic (e.g., "Strength").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Con => "Constitution",
            Self::Siz => "Size",
            Self::Dex => "Dexterity",
            Self::App => "Appearance",
            Self::Int => "Intelligence",
            Self::Pow => "Power",
            Self::Edu => "Education",
            Self::Luck => "Luck",
        }
    }

    /// Returns all nine characteristics in sheet order.
    pub fn all() -> [Characteristic; 9] {
        [
            Self::Str,
            Self::Con,
            Self::Siz,
            Self::Dex,
            Self::App,
            Self::Int,
            Self::Pow,
            Self::Edu,
            Self::Luck,
        ]
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Characteristic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Self::Str),
            "CON" | "CONSTITUTION" => Ok(Self::Con),
            "SIZ" | "SIZE" => Ok(Self::Siz),
            "DEX" | "DEXTERITY" => Ok(Self::Dex),
            "APP" | "APPEARANCE" => Ok(Self::App),
            "INT" | "INTELLIGENCE" => Ok(Self::Int),
            "POW" | "POWER" => Ok(Self::Pow),
            "EDU" | "EDUCATION" => Ok(Self::Edu),
            "LUCK" => Ok(Self::Luck),
            other => Err(DomainError::parse(format!(
                "Unknown characteristic: {}",
                other
            ))),
        }
    }
}

/// A characteristic score: the rolled/assigned `base` and the in-play
/// `current` value.
///
/// `current` starts equal to `base` and may diverge during play through
/// temporary drains or boosts. The rules engine never overwrites `current`
/// once play has begun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicValue {
    base: u8,
    current: u8,
}

impl CharacteristicValue {
    /// Create a value with `current == base`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAttribute` if `base` exceeds 99.
    pub fn new(base: u8) -> Result<Self, DomainError> {
        if base > CHARACTERISTIC_MAX {
            return Err(DomainError::invalid_attribute(
                "characteristic",
                i64::from(base),
                "0..=99",
            ));
        }
        Ok(Self {
            base,
            current: base,
        })
    }

    /// The rolled/assigned base value.
    #[inline]
    pub fn base(&self) -> u8 {
        self.base
    }

    /// The in-play value (base minus drains, plus boosts).
    #[inline]
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Set the in-play value, for temporary drains/boosts during play.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAttribute` if `current` exceeds 99.
    pub fn set_current(&mut self, current: u8) -> Result<(), DomainError> {
        if current > CHARACTERISTIC_MAX {
            return Err(DomainError::invalid_attribute(
                "characteristic",
                i64::from(current),
                "0..=99",
            ));
        }
        self.current = current;
        Ok(())
    }
}

impl Default for CharacteristicValue {
    /// Mid-range default used for freshly created investigators.
    fn default() -> Self {
        Self {
            base: 50,
            current: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_characteristic_as_str() {
        assert_eq!(Characteristic::Str.as_str(), "STR");
        assert_eq!(Characteristic::Siz.as_str(), "SIZ");
        assert_eq!(Characteristic::Luck.as_str(), "LUCK");
    }

    #[test]
    fn test_characteristic_from_str() {
        assert_eq!(Characteristic::from_str("STR"), Ok(Characteristic::Str));
        assert_eq!(Characteristic::from_str("siz"), Ok(Characteristic::Siz));
        assert_eq!(
            Characteristic::from_str("Education"),
            Ok(Characteristic::Edu)
        );
        assert!(Characteristic::from_str("WIS").is_err());
    }

    #[test]
    fn test_all_lists_nine() {
        assert_eq!(Characteristic::all().len(), 9);
    }

    #[test]
    fn test_characteristic_serde_roundtrip() {
        let json = serde_json::to_string(&Characteristic::Pow).expect("serialize");
        assert_eq!(json, "\"POW\"");
        let parsed: Characteristic = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, Characteristic::Pow);
    }

    #[test]
    fn test_value_starts_at_base() {
        let v = CharacteristicValue::new(65).expect("valid");
        assert_eq!(v.base(), 65);
        assert_eq!(v.current(), 65);
    }

    #[test]
    fn test_value_rejects_out_of_range() {
        assert!(CharacteristicValue::new(100).is_err());
    }

    #[test]
    fn test_set_current_diverges_from_base() {
        let mut v = CharacteristicValue::new(60).expect("valid");
        v.set_current(45).expect("valid");
        assert_eq!(v.base(), 60);
        assert_eq!(v.current(), 45);
    }

    #[test]
    fn test_default_is_mid_range() {
        let v = CharacteristicValue::default();
        assert_eq!(v.base(), 50);
        assert_eq!(v.current(), 50);
    }
}
