//! Skill entity - one percentile skill on an investigator's sheet.
//!
//! The base chance comes from the reference catalog when the skill is
//! instantiated; `points_added` is what the player has allocated on top.

use serde::{Deserialize, Serialize};

/// Skill categories for UI grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillCategory {
    Interpersonal,
    Investigation,
    Academic,
    Practical,
    Combat,
    Other,
}

impl SkillCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Interpersonal => "Interpersonal",
            Self::Investigation => "Investigation",
            Self::Academic => "Academic",
            Self::Practical => "Practical",
            Self::Combat => "Combat",
            Self::Other => "Other",
        }
    }
}

/// A skill as it appears on one sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub base_chance: u8,
    pub points_added: u8,
    /// Improvement-check mark; carried on the sheet, never read by this core.
    pub checked: bool,
    pub category: SkillCategory,
}

impl Skill {
    pub fn new(name: impl Into<String>, base_chance: u8, category: SkillCategory) -> Self {
        Self {
            name: name.into(),
            base_chance,
            points_added: 0,
            checked: false,
            category,
        }
    }

    /// Total chance = base + allocated points. The 99 cap is enforced by
    /// external validation, not here.
    pub fn total_chance(&self) -> u32 {
        u32::from(self.base_chance) + u32::from(self.points_added)
    }
}
