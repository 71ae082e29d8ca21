//! Skill reference catalog - read-only table of skills and base chances.
//!
//! Loaded once behind a `Lazy` static and shared across sessions. Lookup is
//! by exact name; a parenthesized specialization such as
//! "Art/Craft (Photography)" falls back to its base entry "Art/Craft".

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::entities::SkillCategory;
use crate::error::DomainError;
use crate::value_objects::{AttributeSet, Characteristic};

/// How a skill's base chance is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillBase {
    /// Fixed percentage from the rulebook.
    Fixed(u8),
    /// Half of DEX (Dodge).
    HalfDex,
    /// Equal to EDU (Language (Own)).
    Edu,
}

impl SkillBase {
    /// Resolve to a concrete percentage for one attribute set.
    pub fn resolve(&self, attributes: &AttributeSet) -> u8 {
        match self {
            Self::Fixed(value) => *value,
            Self::HalfDex => attributes.base(Characteristic::Dex) / 2,
            Self::Edu => attributes.base(Characteristic::Edu),
        }
    }
}

/// One catalog row.
#[derive(Debug, Clone, Copy)]
pub struct SkillDef {
    pub name: &'static str,
    pub base: SkillBase,
    pub category: SkillCategory,
}

const SKILL_TABLE: &[SkillDef] = &[
    // Interpersonal
    def("Charm", SkillBase::Fixed(15), SkillCategory::Interpersonal),
    def("Fast Talk", SkillBase::Fixed(5), SkillCategory::Interpersonal),
    def("Intimidate", SkillBase::Fixed(15), SkillCategory::Interpersonal),
    def("Persuade", SkillBase::Fixed(10), SkillCategory::Interpersonal),
    def("Psychology", SkillBase::Fixed(10), SkillCategory::Interpersonal),
    // Investigation
    def("Appraise", SkillBase::Fixed(5), SkillCategory::Investigation),
    def("Library Use", SkillBase::Fixed(20), SkillCategory::Investigation),
    def("Listen", SkillBase::Fixed(20), SkillCategory::Investigation),
    def("Spot Hidden", SkillBase::Fixed(25), SkillCategory::Investigation),
    def("Track", SkillBase::Fixed(10), SkillCategory::Investigation),
    // Academic
    def("Accounting", SkillBase::Fixed(5), SkillCategory::Academic),
    def("Anthropology", SkillBase::Fixed(1), SkillCategory::Academic),
    def("Archaeology", SkillBase::Fixed(1), SkillCategory::Academic),
    def("Cthulhu Mythos", SkillBase::Fixed(0), SkillCategory::Academic),
    def("History", SkillBase::Fixed(5), SkillCategory::Academic),
    def("Language (Other)", SkillBase::Fixed(1), SkillCategory::Academic),
    def("Language (Own)", SkillBase::Edu, SkillCategory::Academic),
    def("Law", SkillBase::Fixed(5), SkillCategory::Academic),
    def("Medicine", SkillBase::Fixed(1), SkillCategory::Academic),
    def("Natural World", SkillBase::Fixed(10), SkillCategory::Academic),
    def("Occult", SkillBase::Fixed(5), SkillCategory::Academic),
    def("Psychoanalysis", SkillBase::Fixed(1), SkillCategory::Academic),
    def("Science", SkillBase::Fixed(1), SkillCategory::Academic),
    // Practical
    def("Art/Craft", SkillBase::Fixed(5), SkillCategory::Practical),
    def("Climb", SkillBase::Fixed(20), SkillCategory::Practical),
    def("Credit Rating", SkillBase::Fixed(0), SkillCategory::Practical),
    def("Disguise", SkillBase::Fixed(5), SkillCategory::Practical),
    def("Drive Auto", SkillBase::Fixed(20), SkillCategory::Practical),
    def("Electrical Repair", SkillBase::Fixed(10), SkillCategory::Practical),
    def("First Aid", SkillBase::Fixed(30), SkillCategory::Practical),
    def("Jump", SkillBase::Fixed(20), SkillCategory::Practical),
    def("Locksmith", SkillBase::Fixed(1), SkillCategory::Practical),
    def("Mechanical Repair", SkillBase::Fixed(10), SkillCategory::Practical),
    def("Navigate", SkillBase::Fixed(10), SkillCategory::Practical),
    def(
        "Operate Heavy Machinery",
        SkillBase::Fixed(1),
        SkillCategory::Practical,
    ),
    def("Pilot", SkillBase::Fixed(1), SkillCategory::Practical),
    def("Ride", SkillBase::Fixed(5), SkillCategory::Practical),
    def("Sleight of Hand", SkillBase::Fixed(10), SkillCategory::Practical),
    def("Stealth", SkillBase::Fixed(20), SkillCategory::Practical),
    def("Survival", SkillBase::Fixed(10), SkillCategory::Practical),
    def("Swim", SkillBase::Fixed(20), SkillCategory::Practical),
    // Combat
    def("Dodge", SkillBase::HalfDex, SkillCategory::Combat),
    def("Fighting (Brawl)", SkillBase::Fixed(25), SkillCategory::Combat),
    def("Firearms (Handgun)", SkillBase::Fixed(20), SkillCategory::Combat),
    def(
        "Firearms (Rifle/Shotgun)",
        SkillBase::Fixed(25),
        SkillCategory::Combat,
    ),
    def("Throw", SkillBase::Fixed(20), SkillCategory::Combat),
];

const fn def(name: &'static str, base: SkillBase, category: SkillCategory) -> SkillDef {
    SkillDef {
        name,
        base,
        category,
    }
}

/// The skill reference catalog.
pub struct SkillCatalog {
    by_name: HashMap<&'static str, &'static SkillDef>,
}

static SKILL_CATALOG: Lazy<SkillCatalog> = Lazy::new(|| SkillCatalog {
    by_name: SKILL_TABLE.iter().map(|d| (d.name, d)).collect(),
});

/// The process-wide skill catalog.
pub fn skill_catalog() -> &'static SkillCatalog {
    &SKILL_CATALOG
}

impl SkillCatalog {
    /// Look up a skill by exact name, falling back to the base entry for
    /// parenthesized specializations.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownSkill` when neither the name nor its
    /// specialization base is in the catalog.
    pub fn get(&self, name: &str) -> Result<&'static SkillDef, DomainError> {
        if let Some(found) = self.by_name.get(name).copied() {
            return Ok(found);
        }
        if let Some(base_name) = specialization_base(name) {
            if let Some(found) = self.by_name.get(base_name).copied() {
                return Ok(found);
            }
        }
        Err(DomainError::unknown_skill(name))
    }

    /// Resolve a skill's base chance for one attribute set.
    pub fn base_chance(
        &self,
        name: &str,
        attributes: &AttributeSet,
    ) -> Result<u8, DomainError> {
        Ok(self.get(name)?.base.resolve(attributes))
    }

    /// Iterate all catalog rows in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = &'static SkillDef> {
        SKILL_TABLE.iter()
    }

    pub fn len(&self) -> usize {
        SKILL_TABLE.len()
    }

    pub fn is_empty(&self) -> bool {
        SKILL_TABLE.is_empty()
    }
}

/// Strip a trailing parenthesized specialization, e.g.
/// "Art/Craft (Photography)" -> "Art/Craft". Entries whose canonical name
/// already carries parentheses ("Fighting (Brawl)") match exactly first and
/// never reach this fallback.
fn specialization_base(name: &str) -> Option<&str> {
    let open = name.rfind(" (")?;
    if name.ends_with(')') {
        Some(&name[..open])
    } else {
        None
    }
}
