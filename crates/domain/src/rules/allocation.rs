//! Skill-point allocation - pure calculator, never a validator.
//!
//! The engine computes pools and running totals and exposes
//! [`remaining_pool`] for the UI to enforce; it never blocks an assignment,
//! preserving room for house rules and manual overrides.

use crate::aggregates::Investigator;
use crate::catalog::{occupation_catalog, Occupation};
use crate::entities::Skill;
use crate::error::DomainError;
use crate::value_objects::{AttributeSet, Characteristic};

/// Multiplier for the personal-interest pool (INT x 2).
const PERSONAL_INTEREST_MULTIPLIER: u32 = 2;

/// Occupation skill points from the occupation's own formula.
pub fn occupation_pool(occupation: &Occupation, attributes: &AttributeSet) -> u32 {
    occupation.skill_points.evaluate(attributes)
}

/// Personal-interest skill points: INT x 2, independent of occupation.
pub fn personal_interest_pool(attributes: &AttributeSet) -> u32 {
    u32::from(attributes.base(Characteristic::Int)) * PERSONAL_INTEREST_MULTIPLIER
}

/// Record an allocation on one skill. No cap is enforced here; the running
/// total is surfaced through [`remaining_pool`].
pub fn assign_points(skill: &mut Skill, points: u8) {
    skill.points_added = points;
}

/// Sum of points allocated across all skills on the sheet.
pub fn total_assigned(skills: &[Skill]) -> u32 {
    skills.iter().map(|s| u32::from(s.points_added)).sum()
}

/// Points still available: occupation pool + personal interest pool minus
/// everything assigned so far. Negative is a caller-visible signal, not an
/// engine failure.
///
/// # Errors
///
/// Returns `DomainError::UnknownOccupation` if the sheet names an
/// occupation that is not in the catalog.
pub fn remaining_pool(investigator: &Investigator) -> Result<i64, DomainError> {
    let occupation_points = match investigator.occupation() {
        Some(name) => {
            let occupation = occupation_catalog().get(name)?;
            occupation_pool(occupation, investigator.attributes())
        }
        None => 0,
    };
    let total = i64::from(occupation_points)
        + i64::from(personal_interest_pool(investigator.attributes()));
    Ok(total - i64::from(total_assigned(investigator.skills())))
}
