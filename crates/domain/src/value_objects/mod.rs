//! Value objects for the investigator domain.

mod attribute_set;
mod characteristic;
mod derived_stats;
mod finances;
mod formula;
mod names;
mod phase;

pub use attribute_set::AttributeSet;
pub use characteristic::{Characteristic, CharacteristicValue, CHARACTERISTIC_MAX};
pub use derived_stats::{CombatStats, DerivedStats, Pool, SanityTrack};
pub use finances::{Finances, Lifestyle};
pub use formula::{CharacteristicPick, FormulaTerm, SkillPointsFormula};
pub use names::InvestigatorName;
pub use phase::SheetPhase;
