//! Investigator state controller.
//!
//! Owns exactly one in-memory [`Investigator`]; every mutation flows
//! through here. Edits that touch a characteristic or age trigger a full
//! recompute of the derived-stats block inside the aggregate - never an
//! incremental patch - so applying the same final values in any order
//! yields an identical result.
//!
//! Validation happens at this boundary. The pure calculators in the domain
//! crate assume validated input and perform no checks of their own.

mod error;

pub use error::SheetError;

use chrono::{DateTime, Utc};

use sheetkeeper_domain::rules::allocation;
use sheetkeeper_domain::{
    occupation_catalog, Characteristic, DomainError, Investigator, InvestigatorName,
};

use crate::context::SessionContext;
use crate::record::SheetRecord;

/// Biography and free-text fields editable through the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Name,
    Sex,
    Residence,
    Birthplace,
    Description,
    Backstory,
}

/// A single skill-row edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillFieldChange {
    PointsAdded(u8),
    Checked(bool),
}

/// The reactive synchronization controller around one investigator sheet.
///
/// Single-threaded and fully synchronous. A server validating submitted
/// sheets must scope one controller per request; the aggregate is never
/// shared between call sites.
pub struct InvestigatorStateController {
    investigator: Investigator,
}

impl InvestigatorStateController {
    /// Start a fresh sheet in the creation phase.
    pub fn create(name: &str, now: DateTime<Utc>) -> Result<Self, SheetError> {
        let name = InvestigatorName::new(name)?;
        let investigator = Investigator::new(name, now);

        tracing::info!(
            investigator_id = %investigator.id(),
            name = %investigator.name(),
            "Created draft investigator"
        );

        Ok(Self { investigator })
    }

    /// Wrap an existing aggregate (e.g. a submitted sheet to validate).
    pub fn from_investigator(investigator: Investigator) -> Self {
        Self { investigator }
    }

    /// Read access to the owned aggregate.
    #[inline]
    pub fn investigator(&self) -> &Investigator {
        &self.investigator
    }

    /// Give the aggregate back to the caller.
    pub fn into_investigator(self) -> Investigator {
        self.investigator
    }

    // =========================================================================
    // Characteristic & Age Edits
    // =========================================================================

    /// Set a characteristic's base and current value together and recompute
    /// the derived block. Creation phase only.
    pub fn set_characteristic(
        &mut self,
        characteristic: Characteristic,
        value: i32,
    ) -> Result<(), SheetError> {
        let value = into_percentile(characteristic.as_str(), value)?;
        self.investigator.set_characteristic(characteristic, value)?;

        tracing::debug!(
            investigator_id = %self.investigator.id(),
            characteristic = %characteristic,
            value = %value,
            "Set characteristic and recomputed derived stats"
        );

        Ok(())
    }

    /// Set the age and recompute the derived block.
    pub fn set_age(&mut self, value: i32) -> Result<(), SheetError> {
        let age = u8::try_from(value)
            .map_err(|_| DomainError::invalid_attribute("age", i64::from(value), "0..=255"))?;
        self.investigator.set_age(age);

        tracing::debug!(
            investigator_id = %self.investigator.id(),
            age = %age,
            move_rate = %self.investigator.derived().move_rate,
            "Set age and recomputed derived stats"
        );

        Ok(())
    }

    // =========================================================================
    // Biography Edits
    // =========================================================================

    /// Set a biography/free-text field. An empty value clears optional
    /// fields; the name is required and validated.
    pub fn set_identity_field(
        &mut self,
        field: IdentityField,
        value: &str,
    ) -> Result<(), SheetError> {
        match field {
            IdentityField::Name => {
                let name = InvestigatorName::new(value)?;
                self.investigator.set_name(name);
            }
            IdentityField::Sex => self.investigator.set_sex(non_empty(value)),
            IdentityField::Residence => self.investigator.set_residence(non_empty(value)),
            IdentityField::Birthplace => self.investigator.set_birthplace(non_empty(value)),
            IdentityField::Description => self.investigator.set_description(non_empty(value)),
            IdentityField::Backstory => self.investigator.set_backstory(non_empty(value)),
        }

        tracing::debug!(
            investigator_id = %self.investigator.id(),
            field = ?field,
            "Updated identity field"
        );

        Ok(())
    }

    // =========================================================================
    // Occupation & Skill Allocation
    // =========================================================================

    /// Select an occupation by catalog name. Fails fast on unknown names;
    /// no partial pool is computed. Returns the occupation skill-point pool.
    pub fn select_occupation(&mut self, name: &str) -> Result<u32, SheetError> {
        let occupation = occupation_catalog().get(name)?;
        self.investigator.apply_occupation(occupation)?;
        let pool = allocation::occupation_pool(occupation, self.investigator.attributes());

        tracing::info!(
            investigator_id = %self.investigator.id(),
            occupation = %occupation.name,
            pool = %pool,
            credit_rating_min = %occupation.credit_rating.min,
            credit_rating_max = %occupation.credit_rating.max,
            "Selected occupation"
        );

        Ok(pool)
    }

    /// Edit one skill row by sheet index.
    pub fn set_skill_field(
        &mut self,
        index: usize,
        change: SkillFieldChange,
    ) -> Result<(), SheetError> {
        match change {
            SkillFieldChange::PointsAdded(points) => {
                self.investigator.set_skill_points(index, points)?;
                self.warn_if_overspent();
            }
            SkillFieldChange::Checked(checked) => {
                self.investigator.set_skill_checked(index, checked)?;
            }
        }
        Ok(())
    }

    /// Allocate points to a skill by name, pulling it onto the sheet from
    /// the catalog if needed. Never blocks the assignment; an overspent
    /// pool is a caller-visible signal, not a failure.
    pub fn assign_skill_points(&mut self, skill_name: &str, points: u8) -> Result<(), SheetError> {
        let index = self.investigator.ensure_skill(skill_name)?;
        self.investigator.set_skill_points(index, points)?;

        tracing::debug!(
            investigator_id = %self.investigator.id(),
            skill = %skill_name,
            points = %points,
            "Assigned skill points"
        );
        self.warn_if_overspent();

        Ok(())
    }

    /// Points still available across the occupation and personal-interest
    /// pools. Negative means the player has overspent.
    pub fn remaining_pool(&self) -> Result<i64, SheetError> {
        Ok(allocation::remaining_pool(&self.investigator)?)
    }

    fn warn_if_overspent(&self) {
        if let Ok(remaining) = allocation::remaining_pool(&self.investigator) {
            if remaining < 0 {
                tracing::warn!(
                    investigator_id = %self.investigator.id(),
                    overspent_by = %-remaining,
                    "Skill points exceed the available pool"
                );
            }
        }
    }

    // =========================================================================
    // Play-phase Pool Edits
    // =========================================================================

    /// Set the current hit points (in-play damage/healing).
    pub fn set_hp_current(&mut self, value: u8) -> Result<(), SheetError> {
        self.investigator.set_hp_current(value)?;
        Ok(())
    }

    /// Set the current magic points.
    pub fn set_magic_points_current(&mut self, value: u8) -> Result<(), SheetError> {
        self.investigator.set_magic_points_current(value)?;
        Ok(())
    }

    /// Set the current sanity.
    pub fn set_sanity_current(&mut self, value: u8) -> Result<(), SheetError> {
        self.investigator.set_sanity_current(value)?;
        Ok(())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Close the creation phase; base characteristics freeze and recomputes
    /// stop resetting the current pools.
    pub fn begin_play(&mut self) -> Result<(), SheetError> {
        self.investigator.begin_play()?;

        tracing::info!(
            investigator_id = %self.investigator.id(),
            "Sheet entered play"
        );

        Ok(())
    }

    /// Hand the sheet out as a versioned record for the persistence
    /// collaborator, stamped with the explicit session context.
    pub fn finish(&mut self, ctx: &SessionContext, now: DateTime<Utc>) -> SheetRecord {
        self.investigator.touch(now);
        let record = SheetRecord::v1(self.investigator.clone(), ctx, now);

        tracing::info!(
            investigator_id = %self.investigator.id(),
            user_id = %ctx.user_id(),
            "Finished sheet handed to persistence boundary"
        );

        record
    }
}

fn into_percentile(name: &str, value: i32) -> Result<u8, DomainError> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= 99)
        .ok_or_else(|| DomainError::invalid_attribute(name, i64::from(value), "0..=99"))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
