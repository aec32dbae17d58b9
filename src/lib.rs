//! SafeSpeak - feedback classification and report lifecycle tracking
//!
//! Anonymous incident reporting needs two small pieces of real logic:
//! - Routing free-text feedback (and suggesting a report category) from
//!   keyword presence
//! - Turning a store's status token into a fixed lifecycle, with a display
//!   progress value and a synthesized status history
//!
//! Around those sit the staff-side helpers: dashboard counters and the
//! feedback review queue.
//!
//! Both halves are pure and share no state. Persistence, authentication and
//! rendering are left to the caller.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use safespeak_core::{classify, canonicalize, generate_updates, CanonicalState, FeedbackCategory};
//!
//! let result = classify("The app is confusing and the button layout is bad").unwrap();
//! assert_eq!(result.category, FeedbackCategory::Interface);
//! assert!(!result.requires_reference);
//!
//! let state = canonicalize("resolved");
//! assert_eq!(state, CanonicalState::Solved);
//!
//! let created = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
//! assert_eq!(generate_updates(state, created).len(), 3);
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod feedback;
pub mod lexicon;
pub mod lifecycle;
pub mod reference;
pub mod review;
pub mod types;

// Re-export commonly used types
pub use classifier::{classify, suggest_crime_category, ClassifierConfig, KeywordScore, TextClassifier};
pub use crate::config::SafespeakConfig;
pub use error::{Result, SafespeakError};
pub use feedback::{FeedbackDecision, FeedbackGate};
pub use lifecycle::{
    canonicalize, generate_updates, ProgressConfig, ProgressEstimator, RawStatus, ReportRecord,
    StatusBreakdown, TrackingView,
};
pub use reference::{ReferenceFormat, ReportReference};
pub use review::{FeedbackFilter, FeedbackRecord, FeedbackStatus, ReviewCounts};
pub use types::{
    CanonicalState, ClassificationResult, CrimeCategory, FeedbackCategory, Priority,
    StatusUpdateEntry,
};
