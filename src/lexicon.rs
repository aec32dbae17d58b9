//! Keyword tables for free-text classification
//!
//! Lowercase stems grouped into buckets. Classification only checks whether
//! a stem occurs as a substring, so stems are chosen short enough to catch
//! inflections ("harass" covers "harassed" and "harassment").

use crate::types::CrimeCategory;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Buckets used to route feedback
pub struct FeedbackLexicon;

impl FeedbackLexicon {
    /// Stems that indicate feedback about a case
    pub fn case_keywords() -> &'static HashSet<&'static str> {
        static SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
            [
                "investigation",
                "investigator",
                "case",
                "officer",
                "report",
                "status",
                "follow-up",
                "resolution",
                "solved",
                "response",
                "handled",
                "admin",
                "police",
                "evidence",
                "process",
            ]
            .iter()
            .copied()
            .collect()
        });
        &SET
    }

    /// Stems that indicate feedback about the app itself
    pub fn interface_keywords() -> &'static HashSet<&'static str> {
        static SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
            [
                "app",
                "interface",
                "website",
                "page",
                "button",
                "slow",
                "feature",
                "difficult",
                "confusing",
                "ui",
                "design",
                "navigation",
                "usability",
                "menu",
                "color",
                "layout",
            ]
            .iter()
            .copied()
            .collect()
        });
        &SET
    }

    /// Case-related feedback about how an investigation is going
    pub fn investigation_markers() -> &'static [&'static str] {
        &["investigation", "investigator", "progress"]
    }

    /// Case-related feedback about the people handling it
    pub fn admin_markers() -> &'static [&'static str] {
        &["admin", "officer", "staff"]
    }
}

/// One bucket per incident category
pub struct CrimeLexicon;

impl CrimeLexicon {
    /// Stems for a category. `Other` has none and is never suggested.
    pub fn keywords(category: CrimeCategory) -> &'static HashSet<&'static str> {
        static EMPTY: Lazy<HashSet<&'static str>> = Lazy::new(HashSet::new);
        CRIME_BUCKETS.get(&category).unwrap_or(&*EMPTY)
    }
}

static CRIME_BUCKETS: Lazy<HashMap<CrimeCategory, HashSet<&'static str>>> = Lazy::new(|| {
    let table: [(CrimeCategory, &[&'static str]); 8] = [
        (
            CrimeCategory::Theft,
            &[
                "theft",
                "thief",
                "stole",
                "stolen",
                "robbed",
                "robbery",
                "burglar",
                "shoplift",
                "pickpocket",
                "snatched",
                "break-in",
                "larceny",
            ],
        ),
        (
            CrimeCategory::Fraud,
            &[
                "fraud",
                "scam",
                "forged",
                "forgery",
                "counterfeit",
                "embezzl",
                "ponzi",
                "impersonat",
                "bribe",
                "fake invoice",
            ],
        ),
        (
            CrimeCategory::Assault,
            &[
                "assault",
                "attacked",
                "punched",
                "beaten",
                "stabbed",
                "battery",
                "weapon",
                "injured",
                "fight",
                "hit me",
            ],
        ),
        (
            CrimeCategory::Vandalism,
            &[
                "vandal",
                "graffiti",
                "smashed",
                "broken window",
                "damaged",
                "destroyed",
                "spray paint",
                "keyed",
            ],
        ),
        (
            CrimeCategory::Cybercrime,
            &[
                "hack",
                "phishing",
                "malware",
                "ransomware",
                "password",
                "spyware",
                "cyber",
                "data breach",
                "identity",
            ],
        ),
        (
            CrimeCategory::Harassment,
            &[
                "harass",
                "stalk",
                "threaten",
                "bully",
                "intimidat",
                "unwanted",
                "insult",
                "abuse",
            ],
        ),
        (
            CrimeCategory::DrugRelated,
            &[
                "drug",
                "narcotic",
                "cocaine",
                "heroin",
                "marijuana",
                "cannabis",
                "methamphetamine",
                "dealer",
                "overdose",
                "syringe",
            ],
        ),
        (
            CrimeCategory::Environmental,
            &[
                "dumping",
                "dumped",
                "pollut",
                "toxic",
                "waste",
                "chemical",
                "spill",
                "poach",
                "deforest",
                "illegal logging",
            ],
        ),
    ];

    table
        .into_iter()
        .map(|(category, stems)| (category, stems.iter().copied().collect()))
        .collect()
});
