//! Display progress for tracked reports
//!
//! Each lifecycle state owns a band of percentages. Within a band the value
//! advances with the report's age, approaching the top of the band with an
//! exponential curve:
//!
//! - Just filed → band floor
//! - One half-life → halfway through the band
//! - Two half-lives → three quarters
//!
//! The value is a pure function of (state, created_at, as_of), so re-rendering
//! the same report at the same instant always shows the same number.

use crate::types::CanonicalState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Progress estimator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Days for a report to get halfway through its state's band
    pub half_life_days: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            half_life_days: 7.0,
        }
    }
}

/// Inclusive range of percentages owned by a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressBand {
    pub min: u8,
    pub max: u8,
}

impl ProgressBand {
    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn span(&self) -> f64 {
        f64::from(self.max - self.min)
    }
}

/// Band for a state
///
/// Bands never overlap and rise with the lifecycle, so a later state always
/// shows more progress than an earlier one.
pub fn band(state: CanonicalState) -> ProgressBand {
    match state {
        CanonicalState::Reviewing => ProgressBand { min: 10, max: 29 },
        CanonicalState::Investigating => ProgressBand { min: 30, max: 69 },
        CanonicalState::Solved => ProgressBand { min: 80, max: 99 },
        CanonicalState::Closed => ProgressBand { min: 100, max: 100 },
    }
}

/// Deterministic progress estimator
#[derive(Debug, Clone, Default)]
pub struct ProgressEstimator {
    config: ProgressConfig,
}

impl ProgressEstimator {
    pub fn new(config: ProgressConfig) -> Self {
        Self { config }
    }

    /// Progress when nothing is known about elapsed time: the band floor
    pub fn estimate_progress(&self, state: CanonicalState) -> u8 {
        band(state).min
    }

    /// Progress for a report in `state`, created at `created_at`, viewed at `as_of`
    ///
    /// A creation time in the future counts as zero elapsed time.
    pub fn estimate(
        &self,
        state: CanonicalState,
        created_at: DateTime<Utc>,
        as_of: DateTime<Utc>,
    ) -> u8 {
        let band = band(state);
        let elapsed_days = ((as_of - created_at).num_seconds() as f64 / SECONDS_PER_DAY).max(0.0);
        let fraction = self.completion_fraction(elapsed_days);

        let value = f64::from(band.min) + (fraction * band.span()).floor();
        (value as u8).clamp(band.min, band.max)
    }

    /// Fraction of the band covered after `elapsed_days`, in [0, 1]
    fn completion_fraction(&self, elapsed_days: f64) -> f64 {
        if self.config.half_life_days <= 0.0 {
            return 0.0;
        }
        let remaining = 0.5_f64.powf(elapsed_days / self.config.half_life_days);
        (1.0 - remaining).clamp(0.0, 1.0)
    }
}
