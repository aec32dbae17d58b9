//! Core data types for SafeSpeak
//!
//! Every type here is a value object: produced fresh by a classification or
//! lifecycle call, never mutated afterwards, and never cached across calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Routing category for free-text feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    /// Quality or pace of an investigation
    Investigation,

    /// Conduct of officers, admins or staff
    #[serde(alias = "admin")]
    AdminBehavior,

    /// Outcome of a case
    Resolution,

    /// The app itself rather than a case
    #[serde(alias = "other")]
    Interface,
}

impl FeedbackCategory {
    /// Whether feedback in this category concerns a specific case
    pub fn is_case_related(&self) -> bool {
        !matches!(self, FeedbackCategory::Interface)
    }

    /// Human-readable label shown next to the detected type
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackCategory::Investigation => "Investigation Quality",
            FeedbackCategory::AdminBehavior => "Admin Behavior",
            FeedbackCategory::Resolution => "Case Resolution",
            FeedbackCategory::Interface => "Other (App-related)",
        }
    }

    /// Stable token used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackCategory::Investigation => "investigation",
            FeedbackCategory::AdminBehavior => "admin_behavior",
            FeedbackCategory::Resolution => "resolution",
            FeedbackCategory::Interface => "interface",
        }
    }
}

impl std::fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FeedbackCategory {
    type Err = String;

    /// Accepts the wire token or the store's `admin`/`other` spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "investigation" => Ok(FeedbackCategory::Investigation),
            "admin" | "admin_behavior" => Ok(FeedbackCategory::AdminBehavior),
            "resolution" => Ok(FeedbackCategory::Resolution),
            "other" | "interface" => Ok(FeedbackCategory::Interface),
            _ => Err(format!("unknown feedback type: {}", s)),
        }
    }
}

/// Closed list of incident categories offered on the report form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrimeCategory {
    Theft,
    Fraud,
    Assault,
    Vandalism,
    Cybercrime,
    Harassment,
    #[serde(rename = "drug")]
    DrugRelated,
    Environmental,
    Other,
}

impl CrimeCategory {
    /// All categories in form order
    pub const ALL: [CrimeCategory; 9] = [
        CrimeCategory::Theft,
        CrimeCategory::Fraud,
        CrimeCategory::Assault,
        CrimeCategory::Vandalism,
        CrimeCategory::Cybercrime,
        CrimeCategory::Harassment,
        CrimeCategory::DrugRelated,
        CrimeCategory::Environmental,
        CrimeCategory::Other,
    ];

    /// Token stored with the report
    pub fn as_str(&self) -> &'static str {
        match self {
            CrimeCategory::Theft => "theft",
            CrimeCategory::Fraud => "fraud",
            CrimeCategory::Assault => "assault",
            CrimeCategory::Vandalism => "vandalism",
            CrimeCategory::Cybercrime => "cybercrime",
            CrimeCategory::Harassment => "harassment",
            CrimeCategory::DrugRelated => "drug",
            CrimeCategory::Environmental => "environmental",
            CrimeCategory::Other => "other",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            CrimeCategory::Theft => "Theft",
            CrimeCategory::Fraud => "Fraud",
            CrimeCategory::Assault => "Assault",
            CrimeCategory::Vandalism => "Vandalism",
            CrimeCategory::Cybercrime => "Cybercrime",
            CrimeCategory::Harassment => "Harassment",
            CrimeCategory::DrugRelated => "Drug-related",
            CrimeCategory::Environmental => "Environmental",
            CrimeCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for CrimeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CrimeCategory {
    type Err = String;

    /// Accepts either the stored token or the display label, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CrimeCategory::ALL
            .iter()
            .copied()
            .find(|c| {
                c.as_str().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| format!("unknown crime category: {}", s))
    }
}

/// Fixed lifecycle stage of a report, independent of the store's vocabulary
///
/// Declaration order is the lifecycle order, so the derived `Ord` gives
/// `Reviewing < Investigating < Solved < Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalState {
    Reviewing,
    Investigating,
    Solved,
    Closed,
}

impl CanonicalState {
    /// All states in lifecycle order
    pub const ALL: [CanonicalState; 4] = [
        CanonicalState::Reviewing,
        CanonicalState::Investigating,
        CanonicalState::Solved,
        CanonicalState::Closed,
    ];

    /// Zero-based position in the lifecycle
    pub fn ordinal(&self) -> usize {
        match self {
            CanonicalState::Reviewing => 0,
            CanonicalState::Investigating => 1,
            CanonicalState::Solved => 2,
            CanonicalState::Closed => 3,
        }
    }

    /// Badge label on the tracking view
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalState::Reviewing => "Reviewing",
            CanonicalState::Investigating => "Investigating",
            CanonicalState::Solved => "Solved",
            CanonicalState::Closed => "Closed",
        }
    }

    /// Store token that canonicalizes to this state
    pub fn raw_token(&self) -> &'static str {
        match self {
            CanonicalState::Reviewing => "pending",
            CanonicalState::Investigating => "under-investigation",
            CanonicalState::Solved => "resolved",
            CanonicalState::Closed => "closed",
        }
    }

    /// Whether work on the report has finished
    pub fn is_terminal(&self) -> bool {
        matches!(self, CanonicalState::Solved | CanonicalState::Closed)
    }
}

impl std::fmt::Display for CanonicalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Case priority set by staff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Counted as critical on the dashboard
    pub fn is_critical(&self) -> bool {
        matches!(self, Priority::High | Priority::Urgent)
    }
}

/// Outcome of scoring free text against the feedback lexicon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Detected category
    pub category: FeedbackCategory,

    /// Heuristic confidence in [0, 1]
    pub confidence: f32,

    /// Whether the submission must cite a report reference
    pub requires_reference: bool,
}

impl ClassificationResult {
    pub fn new(category: FeedbackCategory, confidence: f32, requires_reference: bool) -> Self {
        Self {
            category,
            confidence: confidence.clamp(0.0, 1.0),
            requires_reference,
        }
    }
}

/// One line of a report's status history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateEntry {
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,

    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_state_ordering() {
        assert!(CanonicalState::Reviewing < CanonicalState::Investigating);
        assert!(CanonicalState::Investigating < CanonicalState::Solved);
        assert!(CanonicalState::Solved < CanonicalState::Closed);

        for (i, state) in CanonicalState::ALL.iter().enumerate() {
            assert_eq!(state.ordinal(), i);
        }
    }

    #[test]
    fn test_terminal_states() {
        let terminal: Vec<CanonicalState> = CanonicalState::ALL
            .into_iter()
            .filter(CanonicalState::is_terminal)
            .collect();
        assert_eq!(terminal, vec![CanonicalState::Solved, CanonicalState::Closed]);
    }

    #[test]
    fn test_critical_priorities() {
        assert!(!Priority::Low.is_critical());
        assert!(!Priority::Medium.is_critical());
        assert!(Priority::High.is_critical());
        assert!(Priority::Urgent.is_critical());

        let priority: Priority = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(priority, Priority::Urgent);
    }

    #[test]
    fn test_store_feedback_type_aliases() {
        let admin: FeedbackCategory = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(admin, FeedbackCategory::AdminBehavior);
        let other: FeedbackCategory = serde_json::from_str("\"other\"").unwrap();
        assert_eq!(other, FeedbackCategory::Interface);
    }

    #[test]
    fn test_feedback_category_parse() {
        assert_eq!("admin".parse::<FeedbackCategory>(), Ok(FeedbackCategory::AdminBehavior));
        assert_eq!("Other".parse::<FeedbackCategory>(), Ok(FeedbackCategory::Interface));
        assert!("praise".parse::<FeedbackCategory>().is_err());
    }

    #[test]
    fn test_crime_category_parse() {
        assert_eq!("theft".parse::<CrimeCategory>(), Ok(CrimeCategory::Theft));
        assert_eq!(
            "Drug-related".parse::<CrimeCategory>(),
            Ok(CrimeCategory::DrugRelated)
        );
        assert_eq!("DRUG".parse::<CrimeCategory>(), Ok(CrimeCategory::DrugRelated));
        assert!("arson".parse::<CrimeCategory>().is_err());
    }

    #[test]
    fn test_serde_tokens() {
        let json = serde_json::to_string(&FeedbackCategory::AdminBehavior).unwrap();
        assert_eq!(json, "\"admin_behavior\"");

        let json = serde_json::to_string(&CrimeCategory::DrugRelated).unwrap();
        assert_eq!(json, "\"drug\"");

        let state: CanonicalState = serde_json::from_str("\"investigating\"").unwrap();
        assert_eq!(state, CanonicalState::Investigating);
    }

    #[test]
    fn test_classification_result_wire_shape() {
        let result = ClassificationResult::new(FeedbackCategory::Interface, 0.9, false);
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["category"], "interface");
        assert_eq!(value["requiresReference"], false);
    }

    #[test]
    fn test_status_entry_date_format() {
        let entry = StatusUpdateEntry {
            date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            message: "received".to_string(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["date"], "2025-04-01");
    }
}
