//! Investigator finances: lifestyle band, cash, and assets.

use serde::{Deserialize, Serialize};

/// Credit Rating to lifestyle mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Lifestyle {
    Penniless,
    Poor,
    #[default]
    Average,
    Affluent,
    Wealthy,
    SuperRich,
}

impl Lifestyle {
    pub fn from_credit_rating(rating: u8) -> Self {
        match rating {
            0 => Lifestyle::Penniless,
            1..=9 => Lifestyle::Poor,
            10..=49 => Lifestyle::Average,
            50..=89 => Lifestyle::Affluent,
            90..=98 => Lifestyle::Wealthy,
            _ => Lifestyle::SuperRich,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Penniless => "Penniless",
            Self::Poor => "Poor",
            Self::Average => "Average",
            Self::Affluent => "Affluent",
            Self::Wealthy => "Wealthy",
            Self::SuperRich => "Super Rich",
        }
    }
}

/// Spending level, cash on hand, and assets.
///
/// The lifestyle band follows the Credit Rating skill; cash and assets are
/// set by the keeper/player and carried as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finances {
    pub spending_level: Lifestyle,
    pub cash: u32,
    pub assets: u32,
}

impl Finances {
    /// Refresh the lifestyle band from a Credit Rating value.
    pub fn with_credit_rating(mut self, rating: u8) -> Self {
        self.spending_level = Lifestyle::from_credit_rating(rating);
        self
    }
}
