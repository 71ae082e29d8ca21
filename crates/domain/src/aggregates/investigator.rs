//! Investigator aggregate - one character sheet under construction or in play.
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: all state is encapsulated behind accessors
//! - **Newtypes**: `InvestigatorName` for the validated name
//! - **Valid by construction**: the derived block is recomputed inside every
//!   mutation that touches a characteristic or age, so it can never drift
//!   from the attribute set

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::{skill_catalog, Occupation};
use crate::entities::{GearItem, Skill, Weapon};
use crate::error::DomainError;
use crate::ids::InvestigatorId;
use crate::rules::{allocation, derived};
use crate::value_objects::{
    AttributeSet, Characteristic, DerivedStats, Finances, InvestigatorName, SheetPhase,
};

/// Default age for a freshly created investigator.
pub const DEFAULT_AGE: u8 = 20;

/// One investigator character sheet.
///
/// # Invariants
///
/// - All nine characteristics are always present (enforced by `AttributeSet`)
/// - The derived-stats block is a pure function of the base characteristics
///   and age at the moment of the last mutation
/// - The skill list never contains two entries with the same name
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use sheetkeeper_domain::aggregates::Investigator;
/// use sheetkeeper_domain::value_objects::InvestigatorName;
///
/// let name = InvestigatorName::new("Arthur Blackwood").unwrap();
/// let investigator = Investigator::new(name, Utc::now());
///
/// // Mid-range defaults: CON 50 + SIZ 50 -> 10 hit points
/// assert_eq!(investigator.derived().hp.max, 10);
/// ```
#[derive(Debug, Clone)]
pub struct Investigator {
    // Identity
    id: InvestigatorId,
    name: InvestigatorName,
    occupation: Option<String>,
    age: u8,
    sex: Option<String>,
    residence: Option<String>,
    birthplace: Option<String>,

    // Narrative
    description: Option<String>,
    backstory: Option<String>,

    // Rules state
    attributes: AttributeSet,
    derived: DerivedStats,
    skills: Vec<Skill>,

    // Possessions
    gear: Vec<GearItem>,
    weapons: Vec<Weapon>,
    finances: Finances,

    // Lifecycle
    phase: SheetPhase,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Investigator {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a fresh sheet in the creation phase with mid-range
    /// characteristics (base = current = 50) and a fully derived block.
    pub fn new(name: InvestigatorName, now: DateTime<Utc>) -> Self {
        let attributes = AttributeSet::new();
        let derived = derived::recompute(
            &DerivedStats::default(),
            &attributes,
            DEFAULT_AGE,
            SheetPhase::Creation,
        );
        Self {
            id: InvestigatorId::new(),
            name,
            occupation: None,
            age: DEFAULT_AGE,
            sex: None,
            residence: None,
            birthplace: None,
            description: None,
            backstory: None,
            attributes,
            derived,
            skills: Vec::new(),
            gear: Vec::new(),
            weapons: Vec::new(),
            finances: Finances::default(),
            phase: SheetPhase::Creation,
            created_at: now,
            updated_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> InvestigatorId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &InvestigatorName {
        &self.name
    }

    #[inline]
    pub fn occupation(&self) -> Option<&str> {
        self.occupation.as_deref()
    }

    #[inline]
    pub fn age(&self) -> u8 {
        self.age
    }

    #[inline]
    pub fn sex(&self) -> Option<&str> {
        self.sex.as_deref()
    }

    #[inline]
    pub fn residence(&self) -> Option<&str> {
        self.residence.as_deref()
    }

    #[inline]
    pub fn birthplace(&self) -> Option<&str> {
        self.birthplace.as_deref()
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    pub fn backstory(&self) -> Option<&str> {
        self.backstory.as_deref()
    }

    #[inline]
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    #[inline]
    pub fn derived(&self) -> &DerivedStats {
        &self.derived
    }

    #[inline]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    #[inline]
    pub fn gear(&self) -> &[GearItem] {
        &self.gear
    }

    #[inline]
    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    #[inline]
    pub fn finances(&self) -> &Finances {
        &self.finances
    }

    #[inline]
    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Index of a skill by name, if present on the sheet.
    pub fn skill_index(&self, name: &str) -> Option<usize> {
        self.skills.iter().position(|s| s.name == name)
    }

    // =========================================================================
    // Builder Methods (storage hydration)
    // =========================================================================

    /// Set the ID (used when loading from storage).
    pub fn with_id(mut self, id: InvestigatorId) -> Self {
        self.id = id;
        self
    }

    /// Set the phase (used when loading from storage).
    pub fn with_phase(mut self, phase: SheetPhase) -> Self {
        self.phase = phase;
        self
    }

    // =========================================================================
    // Characteristic & Age Mutations
    // =========================================================================

    /// Set a characteristic's base and current value together, then
    /// recompute the derived block.
    ///
    /// Defined only for the creation phase: once play has begun this would
    /// clobber any in-play drain on `current`.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidStateTransition` if the sheet is already in play
    /// - `DomainError::InvalidAttribute` if `value` exceeds 99 (no partial
    ///   mutation is left behind)
    pub fn set_characteristic(
        &mut self,
        characteristic: Characteristic,
        value: u8,
    ) -> Result<(), DomainError> {
        if !self.phase.is_creation() {
            return Err(DomainError::invalid_state_transition(format!(
                "cannot set {} base value after play has begun",
                characteristic
            )));
        }
        self.attributes.set(characteristic, value)?;
        self.recompute_derived();
        Ok(())
    }

    /// Set only the in-play value of a characteristic (temporary drain or
    /// boost). Does not touch the derived block, which reads base values.
    pub fn set_characteristic_current(
        &mut self,
        characteristic: Characteristic,
        value: u8,
    ) -> Result<(), DomainError> {
        self.attributes.set_current(characteristic, value)
    }

    /// Set the age and recompute the derived block.
    pub fn set_age(&mut self, age: u8) {
        self.age = age;
        self.recompute_derived();
    }

    /// Full recompute of the derived block from the current attribute set
    /// and age. Idempotent; during play the current pools and sanity
    /// baseline are preserved.
    pub fn recompute_derived(&mut self) {
        self.derived = derived::recompute(&self.derived, &self.attributes, self.age, self.phase);
    }

    // =========================================================================
    // Identity Mutations
    // =========================================================================

    pub fn set_name(&mut self, name: InvestigatorName) {
        self.name = name;
    }

    pub fn set_sex(&mut self, sex: Option<String>) {
        self.sex = sex;
    }

    pub fn set_residence(&mut self, residence: Option<String>) {
        self.residence = residence;
    }

    pub fn set_birthplace(&mut self, birthplace: Option<String>) {
        self.birthplace = birthplace;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_backstory(&mut self, backstory: Option<String>) {
        self.backstory = backstory;
    }

    // =========================================================================
    // Occupation & Skills
    // =========================================================================

    /// Record the occupation and merge its skills onto the sheet.
    ///
    /// Skills already present are left untouched (no duplicates); new ones
    /// get their base chance from the reference catalog, resolved against
    /// the current attribute set for dynamic bases.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownSkill` if the occupation references a
    /// skill the catalog cannot resolve. The occupation is not recorded in
    /// that case.
    pub fn apply_occupation(&mut self, occupation: &Occupation) -> Result<(), DomainError> {
        // Resolve every skill before mutating anything.
        let mut incoming = Vec::with_capacity(occupation.skills.len());
        for name in occupation.skills {
            let def = skill_catalog().get(name)?;
            incoming.push((*name, def.base.resolve(&self.attributes), def.category));
        }
        self.occupation = Some(occupation.name.to_string());
        for (name, base_chance, category) in incoming {
            if self.skill_index(name).is_none() {
                self.skills.push(Skill::new(name, base_chance, category));
            }
        }
        Ok(())
    }

    /// Make sure a skill is on the sheet, pulling it from the catalog if
    /// needed. Returns its index.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownSkill` if the name is neither on the
    /// sheet nor resolvable in the catalog.
    pub fn ensure_skill(&mut self, name: &str) -> Result<usize, DomainError> {
        if let Some(index) = self.skill_index(name) {
            return Ok(index);
        }
        let def = skill_catalog().get(name)?;
        let base_chance = def.base.resolve(&self.attributes);
        self.skills
            .push(Skill::new(name, base_chance, def.category));
        Ok(self.skills.len() - 1)
    }

    /// Set the allocated points of the skill at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the index is out of range.
    pub fn set_skill_points(&mut self, index: usize, points: u8) -> Result<(), DomainError> {
        let skill = self.skill_at_mut(index)?;
        allocation::assign_points(skill, points);
        Ok(())
    }

    /// Set the improvement-check mark of the skill at `index`.
    pub fn set_skill_checked(&mut self, index: usize, checked: bool) -> Result<(), DomainError> {
        let skill = self.skill_at_mut(index)?;
        skill.checked = checked;
        Ok(())
    }

    fn skill_at_mut(&mut self, index: usize) -> Result<&mut Skill, DomainError> {
        let len = self.skills.len();
        self.skills.get_mut(index).ok_or_else(|| {
            DomainError::validation(format!(
                "skill index {} out of range (sheet has {} skills)",
                index, len
            ))
        })
    }

    // =========================================================================
    // Possessions & Finances
    // =========================================================================

    pub fn add_gear(&mut self, item: GearItem) {
        self.gear.push(item);
    }

    pub fn add_weapon(&mut self, weapon: Weapon) {
        self.weapons.push(weapon);
    }

    pub fn set_finances(&mut self, finances: Finances) {
        self.finances = finances;
    }

    // =========================================================================
    // Play-phase Pool Edits
    // =========================================================================

    /// Set the current hit points (in-play damage/healing).
    pub fn set_hp_current(&mut self, current: u8) -> Result<(), DomainError> {
        if current > self.derived.hp.max {
            return Err(DomainError::validation(format!(
                "current HP {} exceeds maximum {}",
                current, self.derived.hp.max
            )));
        }
        self.derived.hp.current = current;
        Ok(())
    }

    /// Set the current magic points.
    pub fn set_magic_points_current(&mut self, current: u8) -> Result<(), DomainError> {
        if current > self.derived.magic_points.max {
            return Err(DomainError::validation(format!(
                "current magic points {} exceeds maximum {}",
                current, self.derived.magic_points.max
            )));
        }
        self.derived.magic_points.current = current;
        Ok(())
    }

    /// Set the current sanity.
    pub fn set_sanity_current(&mut self, current: u8) -> Result<(), DomainError> {
        if current > self.derived.sanity.max {
            return Err(DomainError::validation(format!(
                "current sanity {} exceeds ceiling {}",
                current, self.derived.sanity.max
            )));
        }
        self.derived.sanity.current = current;
        Ok(())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Close the creation phase. From here on, recomputes preserve the
    /// current pools and the sanity baseline, and base characteristics are
    /// frozen.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` if play has already
    /// begun.
    pub fn begin_play(&mut self) -> Result<(), DomainError> {
        if !self.phase.is_creation() {
            return Err(DomainError::invalid_state_transition(
                "sheet is already in play",
            ));
        }
        self.phase = SheetPhase::Play;
        Ok(())
    }

    /// Update the last-modified timestamp.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format for serialization that matches the wire format
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvestigatorWireFormat {
    id: InvestigatorId,
    name: InvestigatorName,
    occupation: Option<String>,
    age: u8,
    sex: Option<String>,
    residence: Option<String>,
    birthplace: Option<String>,
    description: Option<String>,
    backstory: Option<String>,
    attributes: AttributeSet,
    derived: DerivedStats,
    skills: Vec<Skill>,
    gear: Vec<GearItem>,
    weapons: Vec<Weapon>,
    finances: Finances,
    phase: SheetPhase,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Serialize for Investigator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = InvestigatorWireFormat {
            id: self.id,
            name: self.name.clone(),
            occupation: self.occupation.clone(),
            age: self.age,
            sex: self.sex.clone(),
            residence: self.residence.clone(),
            birthplace: self.birthplace.clone(),
            description: self.description.clone(),
            backstory: self.backstory.clone(),
            attributes: self.attributes.clone(),
            derived: self.derived.clone(),
            skills: self.skills.clone(),
            gear: self.gear.clone(),
            weapons: self.weapons.clone(),
            finances: self.finances.clone(),
            phase: self.phase,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Investigator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = InvestigatorWireFormat::deserialize(deserializer)?;

        Ok(Investigator {
            id: wire.id,
            name: wire.name,
            occupation: wire.occupation,
            age: wire.age,
            sex: wire.sex,
            residence: wire.residence,
            birthplace: wire.birthplace,
            description: wire.description,
            backstory: wire.backstory,
            attributes: wire.attributes,
            derived: wire.derived,
            skills: wire.skills,
            gear: wire.gear,
            weapons: wire.weapons,
            finances: wire.finances,
            phase: wire.phase,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::occupation_catalog;

    fn create_test_investigator() -> Investigator {
        let name = InvestigatorName::new("Test Investigator").expect("valid name");
        Investigator::new(name, Utc::now())
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_creates_mid_range_sheet() {
            let investigator = create_test_investigator();

            assert_eq!(investigator.age(), DEFAULT_AGE);
            assert!(investigator.occupation().is_none());
            assert!(investigator.skills().is_empty());
            assert!(investigator.phase().is_creation());
            for (_, value) in investigator.attributes().iter() {
                assert_eq!(value.base(), 50);
            }
        }

        #[test]
        fn hydration_builders_restore_identity_and_phase() {
            let id = InvestigatorId::new();
            let investigator = create_test_investigator()
                .with_id(id)
                .with_phase(SheetPhase::Play);

            assert_eq!(investigator.id(), id);
            assert!(!investigator.phase().is_creation());
        }

        #[test]
        fn new_sheet_has_derived_block_populated() {
            let investigator = create_test_investigator();
            let derived = investigator.derived();

            // CON 50 + SIZ 50 -> 10 HP; POW 50 -> 10 MP, sanity 50
            assert_eq!(derived.hp.max, 10);
            assert_eq!(derived.hp.current, 10);
            assert_eq!(derived.magic_points.max, 10);
            assert_eq!(derived.sanity.start, 50);
            assert_eq!(derived.sanity.current, 50);
            // STR+SIZ = 100 -> build 0; DEX >= SIZ -> move 8
            assert_eq!(derived.build, 0);
            assert_eq!(derived.damage_bonus, "0");
            assert_eq!(derived.move_rate, 8);
        }
    }

    mod characteristic_mutation {
        use super::*;

        #[test]
        fn set_characteristic_recomputes_derived() {
            let mut investigator = create_test_investigator();
            investigator
                .set_characteristic(Characteristic::Con, 70)
                .expect("in range");
            investigator
                .set_characteristic(Characteristic::Siz, 65)
                .expect("in range");

            assert_eq!(investigator.derived().hp.max, 13);
            // Creation phase: current pools follow the recompute
            assert_eq!(investigator.derived().hp.current, 13);
        }

        #[test]
        fn recompute_is_order_independent() {
            let mut a = create_test_investigator();
            a.set_characteristic(Characteristic::Str, 80).expect("ok");
            a.set_characteristic(Characteristic::Siz, 45).expect("ok");
            a.set_characteristic(Characteristic::Dex, 70).expect("ok");

            let mut b = create_test_investigator();
            b.set_characteristic(Characteristic::Dex, 70).expect("ok");
            b.set_characteristic(Characteristic::Str, 80).expect("ok");
            b.set_characteristic(Characteristic::Siz, 45).expect("ok");

            assert_eq!(a.derived(), b.derived());
        }

        #[test]
        fn out_of_range_value_leaves_sheet_unchanged() {
            let mut investigator = create_test_investigator();
            let before = investigator.derived().clone();

            let err = investigator
                .set_characteristic(Characteristic::Str, 120)
                .expect_err("out of range");
            assert!(matches!(err, DomainError::InvalidAttribute { .. }));
            assert_eq!(investigator.attributes().base(Characteristic::Str), 50);
            assert_eq!(investigator.derived(), &before);
        }

        #[test]
        fn base_edits_are_rejected_after_play_begins() {
            let mut investigator = create_test_investigator();
            investigator.begin_play().expect("first transition");

            let err = investigator
                .set_characteristic(Characteristic::Str, 70)
                .expect_err("frozen in play");
            assert!(matches!(err, DomainError::InvalidStateTransition(_)));
        }

        #[test]
        fn current_drain_survives_play_phase_recompute() {
            let mut investigator = create_test_investigator();
            investigator.begin_play().expect("transition");
            investigator.set_hp_current(4).expect("within max");
            investigator.set_sanity_current(31).expect("within ceiling");

            investigator.set_age(41);

            assert_eq!(investigator.derived().hp.current, 4);
            assert_eq!(investigator.derived().sanity.current, 31);
            assert_eq!(investigator.derived().sanity.start, 50);
            // Age 41 applies the -1 movement penalty
            assert_eq!(investigator.derived().move_rate, 7);
        }
    }

    mod occupation {
        use super::*;

        #[test]
        fn apply_occupation_merges_skills_without_duplicates() {
            let mut investigator = create_test_investigator();
            let occupation = occupation_catalog()
                .get("Private Investigator")
                .expect("present");

            investigator
                .apply_occupation(occupation)
                .expect("all skills resolve");
            let count = investigator.skills().len();
            assert_eq!(count, occupation.skills.len());

            // Applying again must not duplicate
            investigator
                .apply_occupation(occupation)
                .expect("idempotent");
            assert_eq!(investigator.skills().len(), count);
        }

        #[test]
        fn applied_skills_carry_catalog_base_chances() {
            let mut investigator = create_test_investigator();
            investigator
                .set_characteristic(Characteristic::Dex, 70)
                .expect("in range");
            let occupation = occupation_catalog().get("Soldier").expect("present");
            investigator
                .apply_occupation(occupation)
                .expect("all skills resolve");

            let dodge = &investigator.skills()[investigator
                .skill_index("Dodge")
                .expect("Dodge granted by Soldier")];
            assert_eq!(dodge.base_chance, 35); // DEX 70 / 2
        }
    }

    mod skills {
        use super::*;

        #[test]
        fn ensure_skill_pulls_from_catalog_once() {
            let mut investigator = create_test_investigator();
            let first = investigator.ensure_skill("Library Use").expect("in catalog");
            let second = investigator.ensure_skill("Library Use").expect("cached");
            assert_eq!(first, second);
            assert_eq!(investigator.skills().len(), 1);
        }

        #[test]
        fn ensure_skill_rejects_unknown_names() {
            let mut investigator = create_test_investigator();
            let err = investigator
                .ensure_skill("Basket Weaving")
                .expect_err("not in catalog");
            assert!(matches!(err, DomainError::UnknownSkill(_)));
        }

        #[test]
        fn skill_index_out_of_range_is_an_error() {
            let mut investigator = create_test_investigator();
            assert!(investigator.set_skill_points(0, 10).is_err());
        }
    }

    mod possessions {
        use super::*;
        use crate::value_objects::{Finances, Lifestyle};

        #[test]
        fn gear_and_weapons_accumulate() {
            let mut investigator = create_test_investigator();
            investigator.add_gear(GearItem::new("Kerosene lamp").with_notes("half full"));
            investigator.add_weapon(Weapon::new(
                ".38 Revolver",
                "Firearms (Handgun)",
                "1d10",
            ));

            assert_eq!(investigator.gear().len(), 1);
            assert_eq!(investigator.weapons()[0].skill_name, "Firearms (Handgun)");
        }

        #[test]
        fn finances_follow_credit_rating_band() {
            let mut investigator = create_test_investigator();
            investigator.set_finances(Finances::default().with_credit_rating(55));
            assert_eq!(investigator.finances().spending_level, Lifestyle::Affluent);
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn serialize_deserialize_roundtrip() {
            let mut investigator = create_test_investigator();
            investigator
                .set_characteristic(Characteristic::Pow, 75)
                .expect("in range");
            investigator.ensure_skill("Occult").expect("in catalog");
            investigator.add_gear(GearItem::new("Electric torch"));

            let json = serde_json::to_string(&investigator).expect("serialize");
            let back: Investigator = serde_json::from_str(&json).expect("deserialize");

            assert_eq!(back.id(), investigator.id());
            assert_eq!(back.name().as_str(), "Test Investigator");
            assert_eq!(back.derived(), investigator.derived());
            assert_eq!(back.skills(), investigator.skills());
        }

        #[test]
        fn serialize_produces_camel_case() {
            let investigator = create_test_investigator();
            let json = serde_json::to_string(&investigator).expect("serialize");

            assert!(json.contains("createdAt"));
            assert!(json.contains("updatedAt"));
            assert!(json.contains("\"derived\""));
            assert!(json.contains("magicPoints"));
        }
    }
}
