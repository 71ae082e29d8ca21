//! Derived statistics block - everything computed from characteristics.
//!
//! The `max` fields, `move_rate`, `build`, and `damage_bonus` are fully
//! determined by the base characteristics and age at the moment of the last
//! recompute. The `current` fields track in-play expenditure and are owned
//! by the player once play begins.

use serde::{Deserialize, Serialize};

/// A spendable resource with a derived maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub max: u8,
    pub current: u8,
}

impl Pool {
    /// A full pool: current equals max.
    pub fn full(max: u8) -> Self {
        Self { max, current: max }
    }
}

/// The sanity track: fixed ceiling, in-play value, and the starting
/// baseline recorded at character creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanityTrack {
    pub max: u8,
    pub current: u8,
    pub start: u8,
}

/// Build and damage bonus, looked up together from STR + SIZ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatStats {
    pub build: i32,
    pub damage_bonus: String,
}

/// The full derived-stats block of one investigator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub hp: Pool,
    pub sanity: SanityTrack,
    pub magic_points: Pool,
    pub move_rate: u8,
    pub build: i32,
    pub damage_bonus: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_pool_starts_at_max() {
        let pool = Pool::full(13);
        assert_eq!(pool.max, 13);
        assert_eq!(pool.current, 13);
    }

    #[test]
    fn derived_stats_serialize_camel_case() {
        let stats = DerivedStats {
            hp: Pool::full(10),
            sanity: SanityTrack {
                max: 99,
                current: 50,
                start: 50,
            },
            magic_points: Pool::full(10),
            move_rate: 8,
            build: 0,
            damage_bonus: "0".to_string(),
        };
        let json = serde_json::to_string(&stats).expect("serialize");
        assert!(json.contains("magicPoints"));
        assert!(json.contains("moveRate"));
        assert!(json.contains("damageBonus"));
    }
}
