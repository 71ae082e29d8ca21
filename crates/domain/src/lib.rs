extern crate self as sheetkeeper_domain;

pub mod aggregates;
pub mod catalog;
pub mod entities;
pub mod error;
pub mod ids;
pub mod rules;
pub mod value_objects;

pub use aggregates::Investigator;

pub use error::DomainError;

// Re-export catalog types and accessors
pub use catalog::{
    occupation_catalog, skill_catalog, CreditRatingRange, Occupation, OccupationCatalog,
    SkillBase, SkillCatalog, SkillDef,
};

// Re-export entities
pub use entities::{GearItem, Skill, SkillCategory, Weapon};

// Re-export ID types
pub use ids::{InvestigatorId, UserId};

// Re-export value objects
pub use value_objects::{
    AttributeSet, Characteristic, CharacteristicPick, CharacteristicValue, CombatStats,
    DerivedStats, Finances, FormulaTerm, InvestigatorName, Lifestyle, Pool, SanityTrack,
    SheetPhase, SkillPointsFormula,
};
