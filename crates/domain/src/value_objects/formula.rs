//! Occupation skill-point formulas.
//!
//! Each occupation grants skill points from a linear combination of
//! characteristics, e.g. `EDU x 4` or `EDU x 2 + max(STR, DEX) x 2`. The
//! formula is kept as an explicit list of terms so each occupation's rule
//! is auditable data rather than opaque code.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::attribute_set::AttributeSet;
use super::characteristic::Characteristic;

/// Which characteristic(s) a term reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CharacteristicPick {
    /// A single named characteristic.
    Single(Characteristic),
    /// The better of two characteristics. Equal values satisfy either
    /// branch; the result is identical.
    BestOf(Characteristic, Characteristic),
}

impl CharacteristicPick {
    fn resolve(&self, attributes: &AttributeSet) -> u32 {
        match self {
            Self::Single(c) => u32::from(attributes.base(*c)),
            Self::BestOf(a, b) => {
                u32::from(attributes.base(*a).max(attributes.base(*b)))
            }
        }
    }
}

/// One `multiplier x characteristic` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaTerm {
    pub pick: CharacteristicPick,
    pub multiplier: u32,
}

/// An occupation's complete skill-point formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPointsFormula {
    terms: Vec<FormulaTerm>,
}

impl SkillPointsFormula {
    /// Start a formula with a `multiplier x characteristic` term.
    pub fn times(characteristic: Characteristic, multiplier: u32) -> Self {
        Self {
            terms: vec![FormulaTerm {
                pick: CharacteristicPick::Single(characteristic),
                multiplier,
            }],
        }
    }

    /// Append a `multiplier x characteristic` term.
    pub fn plus(mut self, characteristic: Characteristic, multiplier: u32) -> Self {
        self.terms.push(FormulaTerm {
            pick: CharacteristicPick::Single(characteristic),
            multiplier,
        });
        self
    }

    /// Append a `multiplier x max(a, b)` term.
    pub fn plus_best_of(
        mut self,
        a: Characteristic,
        b: Characteristic,
        multiplier: u32,
    ) -> Self {
        self.terms.push(FormulaTerm {
            pick: CharacteristicPick::BestOf(a, b),
            multiplier,
        });
        self
    }

    /// The ordered terms of the formula.
    pub fn terms(&self) -> &[FormulaTerm] {
        &self.terms
    }

    /// Evaluate against base characteristic values. Pure and side-effect
    /// free; the result is always non-negative.
    pub fn evaluate(&self, attributes: &AttributeSet) -> u32 {
        self.terms
            .iter()
            .map(|term| term.pick.resolve(attributes) * term.multiplier)
            .sum()
    }
}

impl fmt::Display for SkillPointsFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            match term.pick {
                CharacteristicPick::Single(c) => write!(f, "{}", c)?,
                CharacteristicPick::BestOf(a, b) => write!(f, "max({}, {})", a, b)?,
            }
            write!(f, " x {}", term.multiplier)?;
        }
        Ok(())
    }
}
