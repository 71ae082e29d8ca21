//! AttributeSet - the fixed set of nine characteristic scores.

use serde::{Deserialize, Serialize};

use super::characteristic::{Characteristic, CharacteristicValue};
use crate::error::DomainError;

/// The nine characteristic scores of one investigator.
///
/// Every field is always present; the struct shape itself enforces the
/// all-nine invariant. Index by [`Characteristic`] via [`AttributeSet::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSet {
    strength: CharacteristicValue,
    constitution: CharacteristicValue,
    size: CharacteristicValue,
    dexterity: CharacteristicValue,
    appearance: CharacteristicValue,
    intelligence: CharacteristicValue,
    power: CharacteristicValue,
    education: CharacteristicValue,
    luck: CharacteristicValue,
}

impl AttributeSet {
    /// All nine characteristics at the mid-range default (base = current = 50).
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the score for one characteristic.
    pub fn get(&self, characteristic: Characteristic) -> CharacteristicValue {
        match characteristic {
            Characteristic::Str => self.strength,
            Characteristic::Con => self.constitution,
            Characteristic::Siz => self.size,
            Characteristic::Dex => self.dexterity,
            Characteristic::App => self.appearance,
            Characteristic::Int => self.intelligence,
            Characteristic::Pow => self.power,
            Characteristic::Edu => self.education,
            Characteristic::Luck => self.luck,
        }
    }

    /// Shorthand for the base value of one characteristic.
    #[inline]
    pub fn base(&self, characteristic: Characteristic) -> u8 {
        self.get(characteristic).base()
    }

    /// Set base and current together (character-creation edits).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAttribute` if `value` exceeds 99.
    pub fn set(
        &mut self,
        characteristic: Characteristic,
        value: u8,
    ) -> Result<(), DomainError> {
        *self.slot_mut(characteristic) = CharacteristicValue::new(value)?;
        Ok(())
    }

    /// Set only the in-play value (play-time drains/boosts).
    pub fn set_current(
        &mut self,
        characteristic: Characteristic,
        value: u8,
    ) -> Result<(), DomainError> {
        self.slot_mut(characteristic).set_current(value)
    }

    /// Iterate all nine scores in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Characteristic, CharacteristicValue)> + '_ {
        Characteristic::all().into_iter().map(|c| (c, self.get(c)))
    }

    fn slot_mut(&mut self, characteristic: Characteristic) -> &mut CharacteristicValue {
        match characteristic {
            Characteristic::Str => &mut self.strength,
            Characteristic::Con => &mut self.constitution,
            Characteristic::Siz => &mut self.size,
            Characteristic::Dex => &mut self.dexterity,
            Characteristic::App => &mut self.appearance,
            Characteristic::Int => &mut self.intelligence,
            Characteristic::Pow => &mut self.power,
            Characteristic::Edu => &mut self.education,
            Characteristic::Luck => &mut self.luck,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_defaults_to_fifty() {
        let attrs = AttributeSet::new();
        for (_, value) in attrs.iter() {
            assert_eq!(value.base(), 50);
            assert_eq!(value.current(), 50);
        }
    }

    #[test]
    fn set_updates_base_and_current() {
        let mut attrs = AttributeSet::new();
        attrs.set(Characteristic::Dex, 70).expect("valid");
        assert_eq!(attrs.get(Characteristic::Dex).base(), 70);
        assert_eq!(attrs.get(Characteristic::Dex).current(), 70);
    }

    #[test]
    fn set_rejects_out_of_range() {
        let mut attrs = AttributeSet::new();
        assert!(attrs.set(Characteristic::Str, 100).is_err());
        // No partial mutation on failure
        assert_eq!(attrs.get(Characteristic::Str).base(), 50);
    }

    #[test]
    fn set_current_leaves_base_untouched() {
        let mut attrs = AttributeSet::new();
        attrs.set(Characteristic::Pow, 60).expect("valid");
        attrs.set_current(Characteristic::Pow, 40).expect("valid");
        assert_eq!(attrs.get(Characteristic::Pow).base(), 60);
        assert_eq!(attrs.get(Characteristic::Pow).current(), 40);
    }

    #[test]
    fn iter_visits_all_nine() {
        let attrs = AttributeSet::new();
        assert_eq!(attrs.iter().count(), 9);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let attrs = AttributeSet::new();
        let json = serde_json::to_string(&attrs).expect("serialize");
        assert!(json.contains("strength"));
        assert!(json.contains("education"));
        assert!(json.contains("luck"));
    }
}
