//! Report tracking commands

use super::helpers::{parse_timestamp, print_json};
use chrono::{DateTime, Utc};
use safespeak_core::{
    error::Result,
    ProgressEstimator, ReportRecord, StatusBreakdown, TrackingView,
};
use serde_json::json;
use std::path::Path;
use tracing::{debug, info};

/// Where the tracked report comes from
pub enum TrackSource<'a> {
    /// JSON file holding one store record
    File(&'a Path),

    /// Record given inline on the command line
    Inline {
        id: &'a str,
        status: &'a str,
        created_at: Option<&'a str>,
        category: Option<&'a str>,
    },
}

fn load_record(source: TrackSource<'_>) -> Result<ReportRecord> {
    match source {
        TrackSource::File(path) => {
            debug!("Reading report record from {}", path.display());
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        }
        TrackSource::Inline {
            id,
            status,
            created_at,
            category,
        } => {
            let mut record = ReportRecord::new(id, status);
            if let Some(created_at) = created_at {
                record = record.with_created_at(parse_timestamp(created_at)?);
            }
            if let Some(category) = category {
                record = record.with_category(category);
            }
            Ok(record)
        }
    }
}

fn resolve_as_of(as_of: Option<&str>) -> Result<DateTime<Utc>> {
    as_of.map(parse_timestamp).transpose().map(|ts| ts.unwrap_or_else(Utc::now))
}

/// Handle `track`: show the lifecycle view for one report
pub fn handle_track(
    estimator: &ProgressEstimator,
    source: TrackSource<'_>,
    as_of: Option<&str>,
    json: bool,
) -> Result<()> {
    let record = load_record(source)?;
    let as_of = resolve_as_of(as_of)?;
    let view = TrackingView::from_record(&record, as_of, estimator);
    info!("Tracked report {} ({})", view.report_id, view.canonical_state);

    if json {
        return print_json(&view);
    }

    println!("Report {}", view.report_id);
    println!("  Status:       {}", view.label);
    println!("  Progress:     {}%", view.progress);
    println!("  Category:     {}", view.category);
    println!("  Last updated: {}", view.last_updated);
    println!();
    println!("Status updates:");
    for update in &view.updates {
        println!("  {}  {}", update.date, update.message);
    }
    Ok(())
}

/// Handle `summary`: dashboard counters for a JSON array of records
pub fn handle_summary(path: &Path, json: bool) -> Result<()> {
    let contents = std::fs::read_to_string(path)?;
    let records: Vec<ReportRecord> = serde_json::from_str(&contents)?;
    debug!("Tallying {} report(s) from {}", records.len(), path.display());

    let breakdown = StatusBreakdown::tally(&records);
    if json {
        return print_json(&json!({
            "breakdown": breakdown,
            "solvedRate": breakdown.solved_rate(),
            "investigatingRate": breakdown.investigating_rate(),
            "criticalRate": breakdown.critical_rate(),
        }));
    }

    println!("Total reports:       {}", breakdown.total);
    println!("Under review:        {}", breakdown.reviewing);
    println!(
        "Under investigation: {} ({}%)",
        breakdown.investigating,
        breakdown.investigating_rate()
    );
    println!("Cases solved:        {} ({}%)", breakdown.solved, breakdown.solved_rate());
    println!("Closed:              {}", breakdown.closed);
    println!(
        "Critical cases:      {} ({}%)",
        breakdown.critical,
        breakdown.critical_rate()
    );
    Ok(())
}
