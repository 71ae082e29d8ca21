//! Gear and weapon list entries carried on the sheet.

use serde::{Deserialize, Serialize};

/// A piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearItem {
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl GearItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A weapon entry: which skill fires it and what it rolls for damage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub name: String,
    pub skill_name: String,
    pub damage: String,
}

impl Weapon {
    pub fn new(
        name: impl Into<String>,
        skill_name: impl Into<String>,
        damage: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            skill_name: skill_name.into(),
            damage: damage.into(),
        }
    }
}
