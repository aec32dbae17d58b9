//! Report lifecycle
//!
//! Raw store status → [`CanonicalState`](crate::types::CanonicalState) →
//! progress and status history. Nothing here keeps state between calls.

pub mod narrative;
pub mod progress;
pub mod status;
pub mod tracking;

pub use narrative::generate_updates;
pub use progress::{band, ProgressBand, ProgressConfig, ProgressEstimator};
pub use status::{canonicalize, RawStatus};
pub use tracking::{ReportRecord, StatusBreakdown, TrackingView};
