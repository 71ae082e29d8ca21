//! Derived-stat calculation - pure, deterministic, no I/O.
//!
//! All functions assume characteristics already validated into 0..=99;
//! domain checks live at the mutation boundary, not here.
//!
//! The build/damage-bonus and movement age-penalty tables are explicit
//! ordered breakpoint slices so every tier boundary is auditable and
//! testable on its own.

use crate::value_objects::{
    AttributeSet, Characteristic, CombatStats, DerivedStats, Pool, SanityTrack, SheetPhase,
};

/// Fixed sanity ceiling. Mythos-driven reduction of the ceiling is out of
/// scope for this core.
pub const MAX_SANITY: u8 = 99;

/// Movement rate never drops below this, whatever the age penalty.
pub const MIN_MOVE_RATE: u8 = 1;

/// Maximum hit points: floor((CON + SIZ) / 10).
pub fn max_hp(con: u8, siz: u8) -> u8 {
    ((u16::from(con) + u16::from(siz)) / 10) as u8
}

/// Magic points: floor(POW / 5).
pub fn magic_points(pow: u8) -> u8 {
    pow / 5
}

/// Starting sanity: POW, capped at the fixed ceiling.
pub fn starting_sanity(pow: u8) -> u8 {
    pow.min(MAX_SANITY)
}

/// Hard-difficulty threshold: half the value, rounded down.
pub fn half(value: u8) -> u8 {
    value / 2
}

/// Extreme-difficulty threshold: a fifth of the value, rounded down.
pub fn fifth(value: u8) -> u8 {
    value / 5
}

/// One row of the build/damage-bonus table; `max_sum` is inclusive.
#[derive(Debug, Clone, Copy)]
struct BuildTier {
    max_sum: u16,
    build: i32,
    damage_bonus: &'static str,
}

/// STR + SIZ tiers, in ascending order. Sums above the last row gain one
/// extra d6 and +1 build per further 80 points.
const BUILD_TABLE: &[BuildTier] = &[
    BuildTier { max_sum: 64, build: -2, damage_bonus: "-2" },
    BuildTier { max_sum: 84, build: -1, damage_bonus: "-1" },
    BuildTier { max_sum: 124, build: 0, damage_bonus: "0" },
    BuildTier { max_sum: 164, build: 1, damage_bonus: "+1d4" },
    BuildTier { max_sum: 204, build: 2, damage_bonus: "+1d6" },
    BuildTier { max_sum: 284, build: 3, damage_bonus: "+2d6" },
    BuildTier { max_sum: 364, build: 4, damage_bonus: "+3d6" },
    BuildTier { max_sum: 444, build: 5, damage_bonus: "+4d6" },
];

/// Build and damage bonus from STR + SIZ.
pub fn combat_stats(str_val: u8, siz: u8) -> CombatStats {
    combat_stats_for_sum(u16::from(str_val) + u16::from(siz))
}

/// Tier lookup on the raw STR + SIZ sum. Investigator sums cap at 198; the
/// upper tiers exist for creature-scale reuse and stay total over u16.
pub fn combat_stats_for_sum(sum: u16) -> CombatStats {
    for tier in BUILD_TABLE {
        if sum <= tier.max_sum {
            return CombatStats {
                build: tier.build,
                damage_bonus: tier.damage_bonus.to_string(),
            };
        }
    }
    // Beyond the table: one extra d6 and +1 build per further 80 points.
    let extra = i32::from((sum - 445) / 80);
    CombatStats {
        build: 6 + extra,
        damage_bonus: format!("+{}d6", 5 + extra),
    }
}

/// One row of the movement age-penalty table; `max_age` is inclusive.
#[derive(Debug, Clone, Copy)]
struct AgeTier {
    max_age: u8,
    penalty: u8,
}

const MOVE_AGE_PENALTIES: &[AgeTier] = &[
    AgeTier { max_age: 39, penalty: 0 },
    AgeTier { max_age: 49, penalty: 1 },
    AgeTier { max_age: 59, penalty: 2 },
    AgeTier { max_age: 69, penalty: 3 },
    AgeTier { max_age: 79, penalty: 4 },
];

fn move_age_penalty(age: u8) -> u8 {
    for tier in MOVE_AGE_PENALTIES {
        if age <= tier.max_age {
            return tier.penalty;
        }
    }
    5
}

/// Movement rate from age and the STR/DEX vs SIZ comparison.
///
/// The strict double-exceed rule is evaluated first because the ranges
/// overlap at equality. The result is floored at [`MIN_MOVE_RATE`].
pub fn movement_rate(age: u8, str_val: u8, dex: u8, siz: u8) -> u8 {
    let base: u8 = if dex > siz && str_val > siz {
        9
    } else if dex >= siz || str_val >= siz {
        8
    } else {
        7
    };
    base.saturating_sub(move_age_penalty(age)).max(MIN_MOVE_RATE)
}

/// Full recompute of the derived-stats block from the complete attribute
/// set and age.
///
/// Always a full recompute, never an incremental patch, so the result is
/// independent of mutation order and idempotent for unchanged inputs.
/// During `Creation` the current pools and the sanity baseline are reset to
/// their derived values; once `Play` has begun they belong to the player
/// and are carried over from `previous` untouched.
pub fn recompute(
    previous: &DerivedStats,
    attributes: &AttributeSet,
    age: u8,
    phase: SheetPhase,
) -> DerivedStats {
    let str_val = attributes.base(Characteristic::Str);
    let con = attributes.base(Characteristic::Con);
    let siz = attributes.base(Characteristic::Siz);
    let dex = attributes.base(Characteristic::Dex);
    let pow = attributes.base(Characteristic::Pow);

    let hp_max = max_hp(con, siz);
    let mp_max = magic_points(pow);
    let sanity_start = starting_sanity(pow);
    let combat = combat_stats(str_val, siz);

    let (hp, magic, sanity) = if phase.is_creation() {
        (
            Pool::full(hp_max),
            Pool::full(mp_max),
            SanityTrack {
                max: MAX_SANITY,
                current: sanity_start,
                start: sanity_start,
            },
        )
    } else {
        (
            Pool {
                max: hp_max,
                current: previous.hp.current,
            },
            Pool {
                max: mp_max,
                current: previous.magic_points.current,
            },
            SanityTrack {
                max: MAX_SANITY,
                current: previous.sanity.current,
                start: previous.sanity.start,
            },
        )
    };

    DerivedStats {
        hp,
        sanity,
        magic_points: magic,
        move_rate: movement_rate(age, str_val, dex, siz),
        build: combat.build,
        damage_bonus: combat.damage_bonus,
    }
}
