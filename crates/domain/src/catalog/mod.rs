//! Read-only reference catalogs, loaded once and immutable thereafter.

mod occupations;
mod skills;

pub use occupations::{occupation_catalog, CreditRatingRange, Occupation, OccupationCatalog};
pub use skills::{skill_catalog, SkillBase, SkillCatalog, SkillDef};
