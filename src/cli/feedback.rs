//! Feedback submission check

use super::helpers::print_json;
use safespeak_core::{error::Result, FeedbackGate};

/// Handle `feedback`: run the submission rules without submitting
pub fn handle(gate: &FeedbackGate, message: &str, reference: Option<&str>, json: bool) -> Result<()> {
    let decision = gate.check(message, reference)?;

    if json {
        return print_json(&decision);
    }

    match &decision.classification {
        Some(result) => println!("Feedback accepted as {}", result.category.label()),
        None => println!("Feedback accepted (unclassified)"),
    }
    if let Some(reference) = &decision.reference {
        println!("  Linked to report {}", reference);
    }
    Ok(())
}
