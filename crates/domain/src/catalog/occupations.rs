//! Occupation reference catalog.
//!
//! Each occupation carries its skill-point formula, its Credit Rating
//! range, and the skills it grants access to. Loaded once behind a `Lazy`
//! static; lookup is by exact name and unknown names fail fast.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::DomainError;
use crate::value_objects::{Characteristic, SkillPointsFormula};

/// Credit Rating bounds imposed by an occupation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRatingRange {
    pub min: u8,
    pub max: u8,
}

impl CreditRatingRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Clamp a proposed Credit Rating into this occupation's range.
    pub fn clamp(&self, rating: u8) -> u8 {
        rating.clamp(self.min, self.max)
    }

    pub fn contains(&self, rating: u8) -> bool {
        (self.min..=self.max).contains(&rating)
    }
}

/// One occupation definition.
#[derive(Debug, Clone)]
pub struct Occupation {
    pub name: &'static str,
    pub skill_points: SkillPointsFormula,
    pub credit_rating: CreditRatingRange,
    pub skills: &'static [&'static str],
}

/// The occupation reference catalog.
pub struct OccupationCatalog {
    occupations: Vec<Occupation>,
    by_name: HashMap<&'static str, usize>,
}

static OCCUPATION_CATALOG: Lazy<OccupationCatalog> = Lazy::new(|| {
    let occupations = build_occupations();
    let by_name = occupations
        .iter()
        .enumerate()
        .map(|(i, o)| (o.name, i))
        .collect();
    OccupationCatalog {
        occupations,
        by_name,
    }
});

/// The process-wide occupation catalog.
pub fn occupation_catalog() -> &'static OccupationCatalog {
    &OCCUPATION_CATALOG
}

impl OccupationCatalog {
    /// Look up an occupation by exact name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownOccupation` for names not in the catalog.
    pub fn get(&self, name: &str) -> Result<&Occupation, DomainError> {
        self.by_name
            .get(name)
            .map(|&i| &self.occupations[i])
            .ok_or_else(|| DomainError::unknown_occupation(name))
    }

    /// Iterate all occupations in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Occupation> {
        self.occupations.iter()
    }

    pub fn len(&self) -> usize {
        self.occupations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupations.is_empty()
    }
}

fn edu4() -> SkillPointsFormula {
    SkillPointsFormula::times(Characteristic::Edu, 4)
}

fn edu2_best_str_dex() -> SkillPointsFormula {
    SkillPointsFormula::times(Characteristic::Edu, 2).plus_best_of(
        Characteristic::Str,
        Characteristic::Dex,
        2,
    )
}

fn build_occupations() -> Vec<Occupation> {
    vec![
        Occupation {
            name: "Antiquarian",
            skill_points: edu4(),
            credit_rating: CreditRatingRange::new(30, 70),
            skills: &[
                "Appraise",
                "Art/Craft",
                "History",
                "Library Use",
                "Language (Other)",
                "Spot Hidden",
                "Accounting",
                "Occult",
            ],
        },
        Occupation {
            name: "Author",
            skill_points: edu4(),
            credit_rating: CreditRatingRange::new(9, 30),
            skills: &[
                "Art/Craft",
                "History",
                "Library Use",
                "Language (Other)",
                "Language (Own)",
                "Psychology",
                "Occult",
                "Natural World",
            ],
        },
        Occupation {
            name: "Dilettante",
            skill_points: SkillPointsFormula::times(Characteristic::Edu, 2)
                .plus(Characteristic::App, 2),
            credit_rating: CreditRatingRange::new(50, 99),
            skills: &[
                "Art/Craft",
                "Firearms (Handgun)",
                "Language (Other)",
                "Ride",
                "Charm",
                "History",
                "Natural World",
                "Swim",
            ],
        },
        Occupation {
            name: "Doctor of Medicine",
            skill_points: edu4(),
            credit_rating: CreditRatingRange::new(30, 80),
            skills: &[
                "First Aid",
                "Medicine",
                "Language (Other)",
                "Psychology",
                "Science (Biology)",
                "Science (Pharmacy)",
                "Library Use",
                "Persuade",
            ],
        },
        Occupation {
            name: "Journalist",
            skill_points: edu4(),
            credit_rating: CreditRatingRange::new(9, 30),
            skills: &[
                "Art/Craft",
                "History",
                "Library Use",
                "Language (Own)",
                "Psychology",
                "Fast Talk",
                "Persuade",
                "Listen",
            ],
        },
        Occupation {
            name: "Lawyer",
            skill_points: edu4(),
            credit_rating: CreditRatingRange::new(30, 80),
            skills: &[
                "Accounting",
                "Law",
                "Library Use",
                "Fast Talk",
                "Persuade",
                "Psychology",
                "Intimidate",
                "History",
            ],
        },
        Occupation {
            name: "Librarian",
            skill_points: edu4(),
            credit_rating: CreditRatingRange::new(9, 35),
            skills: &[
                "Accounting",
                "Library Use",
                "Language (Other)",
                "Language (Own)",
                "History",
                "Occult",
                "Listen",
                "Spot Hidden",
            ],
        },
        Occupation {
            name: "Parapsychologist",
            skill_points: edu4(),
            credit_rating: CreditRatingRange::new(9, 30),
            skills: &[
                "Anthropology",
                "Art/Craft (Photography)",
                "History",
                "Library Use",
                "Occult",
                "Language (Other)",
                "Psychology",
                "Listen",
            ],
        },
        Occupation {
            name: "Police Detective",
            skill_points: edu2_best_str_dex(),
            credit_rating: CreditRatingRange::new(20, 50),
            skills: &[
                "Disguise",
                "Firearms (Handgun)",
                "Law",
                "Listen",
                "Intimidate",
                "Psychology",
                "Spot Hidden",
                "Drive Auto",
            ],
        },
        Occupation {
            name: "Private Investigator",
            skill_points: edu2_best_str_dex(),
            credit_rating: CreditRatingRange::new(9, 30),
            skills: &[
                "Art/Craft (Photography)",
                "Disguise",
                "Law",
                "Library Use",
                "Fast Talk",
                "Psychology",
                "Spot Hidden",
                "Locksmith",
            ],
        },
        Occupation {
            name: "Professor",
            skill_points: edu4(),
            credit_rating: CreditRatingRange::new(20, 70),
            skills: &[
                "Language (Other)",
                "Language (Own)",
                "Library Use",
                "Psychology",
                "History",
                "Occult",
                "Persuade",
                "Science",
            ],
        },
        Occupation {
            name: "Soldier",
            skill_points: edu2_best_str_dex(),
            credit_rating: CreditRatingRange::new(9, 30),
            skills: &[
                "Climb",
                "Dodge",
                "Fighting (Brawl)",
                "Firearms (Rifle/Shotgun)",
                "Stealth",
                "Survival",
                "First Aid",
                "Mechanical Repair",
            ],
        },
    ]
}
