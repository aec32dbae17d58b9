//! Tracking payload assembled from a stored report
//!
//! Records arrive from the external store already validated. This module
//! runs them through the lifecycle adapters and produces the display payload
//! for the tracking view and the dashboard counters.

use super::narrative::generate_updates;
use super::progress::ProgressEstimator;
use super::status::RawStatus;
use crate::types::{CanonicalState, CrimeCategory, Priority, StatusUpdateEntry};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Age assumed for records stored without a creation time
const MISSING_CREATED_AT_AGE_DAYS: i64 = 3;

/// Report as supplied by the external store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: String,

    #[serde(default, alias = "raw_status")]
    pub status: RawStatus,

    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, alias = "crime_type", alias = "crimeType")]
    pub category: Option<String>,

    #[serde(default)]
    pub priority: Option<Priority>,
}

impl ReportRecord {
    pub fn new(id: impl Into<String>, status: impl Into<RawStatus>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            created_at: None,
            category: None,
            priority: None,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn is_critical(&self) -> bool {
        self.priority.is_some_and(|p| p.is_critical())
    }

    pub fn canonical_state(&self) -> CanonicalState {
        self.status.canonical()
    }

    /// Display label for the stored category
    ///
    /// Known tokens are shown with their form label, unknown ones verbatim.
    pub fn category_label(&self) -> String {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => "Unknown".to_string(),
            Some(raw) => raw
                .parse::<CrimeCategory>()
                .map(|c| c.label().to_string())
                .unwrap_or_else(|_| raw.to_string()),
        }
    }
}

/// Everything the tracking view displays for one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingView {
    pub report_id: String,
    pub canonical_state: CanonicalState,
    pub label: String,
    pub progress: u8,
    pub last_updated: NaiveDate,
    pub category: String,
    pub updates: Vec<StatusUpdateEntry>,
}

impl TrackingView {
    /// Build the view for `record` as seen at `as_of`
    pub fn from_record(
        record: &ReportRecord,
        as_of: DateTime<Utc>,
        estimator: &ProgressEstimator,
    ) -> Self {
        let state = record.canonical_state();
        let created_at = record.created_at.unwrap_or_else(|| {
            debug!(
                "Report {} has no creation time, assuming {} days old",
                record.id, MISSING_CREATED_AT_AGE_DAYS
            );
            as_of - Duration::days(MISSING_CREATED_AT_AGE_DAYS)
        });

        Self {
            report_id: record.id.clone(),
            canonical_state: state,
            label: state.label().to_string(),
            progress: estimator.estimate(state, created_at, as_of),
            last_updated: created_at.date_naive(),
            category: record.category_label(),
            updates: generate_updates(state, created_at),
        }
    }
}

/// Dashboard counters over a set of reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub total: usize,
    pub reviewing: usize,
    pub investigating: usize,
    pub solved: usize,
    pub closed: usize,
    pub critical: usize,
}

impl StatusBreakdown {
    pub fn tally<'a>(records: impl IntoIterator<Item = &'a ReportRecord>) -> Self {
        records
            .into_iter()
            .fold(Self::default(), |mut acc, record| {
                acc.total += 1;
                match record.canonical_state() {
                    CanonicalState::Reviewing => acc.reviewing += 1,
                    CanonicalState::Investigating => acc.investigating += 1,
                    CanonicalState::Solved => acc.solved += 1,
                    CanonicalState::Closed => acc.closed += 1,
                }
                if record.is_critical() {
                    acc.critical += 1;
                }
                acc
            })
    }

    pub fn count(&self, state: CanonicalState) -> usize {
        match state {
            CanonicalState::Reviewing => self.reviewing,
            CanonicalState::Investigating => self.investigating,
            CanonicalState::Solved => self.solved,
            CanonicalState::Closed => self.closed,
        }
    }

    /// Reports still being worked on
    pub fn open(&self) -> usize {
        CanonicalState::ALL
            .into_iter()
            .filter(|state| !state.is_terminal())
            .map(|state| self.count(state))
            .sum()
    }

    pub fn solved_rate(&self) -> u8 {
        self.percent_of_total(self.solved)
    }

    pub fn investigating_rate(&self) -> u8 {
        self.percent_of_total(self.investigating)
    }

    pub fn critical_rate(&self) -> u8 {
        self.percent_of_total(self.critical)
    }

    /// Rounded share of all reports; 0 when there are none
    fn percent_of_total(&self, part: usize) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let percent = (part as f64 / self.total as f64 * 100.0).round();
        percent.clamp(0.0, 100.0) as u8
    }
}
