//! Feedback review commands

use super::helpers::print_json;
use safespeak_core::{
    error::{Result, SafespeakError},
    FeedbackFilter, FeedbackRecord, ReviewCounts,
};
use serde_json::json;
use std::path::Path;
use tracing::{debug, info};

fn load_feedback(path: &Path) -> Result<Vec<FeedbackRecord>> {
    debug!("Reading feedback from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Handle `review`: list feedback matching `filter`, or open one item by ID
pub fn handle(path: &Path, filter: &FeedbackFilter, open: Option<&str>, json: bool) -> Result<()> {
    let mut records = load_feedback(path)?;

    if let Some(id) = open {
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| SafespeakError::Other(format!("No feedback with ID {}", id)))?;
        record.view();
        info!("Opened feedback {} ({})", record.id, record.status);

        if json {
            return print_json(&*record);
        }
        println!("Feedback {}", record.id);
        println!("  Status:    {}", record.status.label());
        if let Some(category) = record.category {
            println!("  Type:      {}", category.label());
        }
        if let Some(report_id) = &record.report_id {
            println!("  Report:    {}", report_id);
        }
        if let Some(date) = &record.date {
            println!("  Submitted: {}", date);
        }
        println!();
        println!("{}", record.description);
        return Ok(());
    }

    let counts = ReviewCounts::tally(&records);
    let matching = filter.apply(&records);

    if json {
        return print_json(&json!({
            "counts": counts,
            "feedback": matching,
        }));
    }

    println!(
        "{} feedback item(s): {} unread, {} flagged, {} resolved",
        counts.total, counts.unread, counts.flagged, counts.resolved
    );
    for record in matching {
        let category = record.category.map(|c| c.label()).unwrap_or("Unknown");
        println!(
            "  {:<10} {:<8} {:<22} {}",
            record.id,
            record.status.as_str(),
            category,
            record.report_id.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
