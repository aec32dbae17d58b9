//! Staff review of submitted feedback
//!
//! Each feedback item carries a review status. Opening an unread item marks
//! it read; any other change is an explicit staff decision.

use crate::types::FeedbackCategory;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Where a feedback item is in staff review
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    #[default]
    Unread,
    Read,
    Flagged,
    Resolved,
}

impl FeedbackStatus {
    pub const ALL: [FeedbackStatus; 4] = [
        FeedbackStatus::Unread,
        FeedbackStatus::Read,
        FeedbackStatus::Flagged,
        FeedbackStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::Unread => "unread",
            FeedbackStatus::Read => "read",
            FeedbackStatus::Flagged => "flagged",
            FeedbackStatus::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedbackStatus::Unread => "Unread",
            FeedbackStatus::Read => "Read",
            FeedbackStatus::Flagged => "Flagged",
            FeedbackStatus::Resolved => "Resolved",
        }
    }

    /// Status after a staff member opens the item
    pub fn on_view(self) -> Self {
        match self {
            FeedbackStatus::Unread => FeedbackStatus::Read,
            other => other,
        }
    }
}

impl std::fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FeedbackStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        FeedbackStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown feedback status: {}", s))
    }
}

/// Feedback item as supplied by the external store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: String,

    #[serde(default, alias = "reportId")]
    pub report_id: Option<String>,

    #[serde(default, rename = "type")]
    pub category: Option<FeedbackCategory>,

    #[serde(default)]
    pub description: String,

    /// Submission date as stored; shown verbatim
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub status: FeedbackStatus,
}

impl FeedbackRecord {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            report_id: None,
            category: None,
            description: description.into(),
            date: None,
            status: FeedbackStatus::default(),
        }
    }

    pub fn with_report_id(mut self, report_id: impl Into<String>) -> Self {
        self.report_id = Some(report_id.into());
        self
    }

    pub fn with_category(mut self, category: FeedbackCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_status(mut self, status: FeedbackStatus) -> Self {
        self.status = status;
        self
    }

    /// Open the item, marking it read if it was unread
    ///
    /// Returns true if the status changed.
    pub fn view(&mut self) -> bool {
        let next = self.status.on_view();
        let changed = next != self.status;
        if changed {
            debug!("Feedback {} marked {}", self.id, next);
        }
        self.status = next;
        changed
    }

    pub fn set_status(&mut self, status: FeedbackStatus) {
        if status != self.status {
            debug!("Feedback {}: {} -> {}", self.id, self.status, status);
        }
        self.status = status;
    }
}

/// Search and filter settings of the review list
#[derive(Debug, Clone, Default)]
pub struct FeedbackFilter {
    /// Case-insensitive text matched against description, ID and report ID
    pub query: Option<String>,
    pub category: Option<FeedbackCategory>,
    pub status: Option<FeedbackStatus>,
}

impl FeedbackFilter {
    pub fn matches(&self, record: &FeedbackRecord) -> bool {
        self.matches_query(record)
            && self.category.map_or(true, |c| record.category == Some(c))
            && self.status.map_or(true, |s| record.status == s)
    }

    fn matches_query(&self, record: &FeedbackRecord) -> bool {
        let query = match self.query.as_deref().map(str::trim) {
            None | Some("") => return true,
            Some(q) => q.to_lowercase(),
        };

        record.description.to_lowercase().contains(&query)
            || record.id.to_lowercase().contains(&query)
            || record
                .report_id
                .as_deref()
                .is_some_and(|r| r.to_lowercase().contains(&query))
    }

    pub fn apply<'a>(&self, records: &'a [FeedbackRecord]) -> Vec<&'a FeedbackRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Count of feedback items per review status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCounts {
    pub total: usize,
    pub unread: usize,
    pub read: usize,
    pub flagged: usize,
    pub resolved: usize,
}

impl ReviewCounts {
    pub fn tally<'a>(records: impl IntoIterator<Item = &'a FeedbackRecord>) -> Self {
        records.into_iter().fold(Self::default(), |mut acc, record| {
            acc.total += 1;
            match record.status {
                FeedbackStatus::Unread => acc.unread += 1,
                FeedbackStatus::Read => acc.read += 1,
                FeedbackStatus::Flagged => acc.flagged += 1,
                FeedbackStatus::Resolved => acc.resolved += 1,
            }
            acc
        })
    }
}
