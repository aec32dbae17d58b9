//! Classification commands

use super::helpers::print_json;
use safespeak_core::{error::Result, TextClassifier};
use serde_json::json;
use tracing::debug;

/// Handle `classify`: route a feedback message
pub fn handle_classify(classifier: &TextClassifier, text: &str, json: bool) -> Result<()> {
    debug!("Classifying {} character(s)", text.chars().count());
    let result = classifier.classify(text);

    if json {
        let score = classifier.score(text);
        return print_json(&json!({
            "result": result,
            "caseCount": score.case_count,
            "interfaceCount": score.interface_count,
        }));
    }

    match result {
        None => {
            println!(
                "Not enough text to classify yet (need more than {} characters)",
                classifier.config().min_text_length
            );
        }
        Some(result) => {
            println!("Detected feedback type: {}", result.category.label());
            println!("  Confidence: {:.0}%", result.confidence * 100.0);
            if result.category.is_case_related() {
                println!("  This appears to be feedback about a case or investigation.");
            } else {
                println!("  This appears to be feedback about the app or interface.");
            }
            if result.requires_reference {
                println!("  A report ID is required for this feedback.");
            }
        }
    }
    Ok(())
}

/// Handle `suggest`: propose a report category from a description
pub fn handle_suggest(classifier: &TextClassifier, text: &str, json: bool) -> Result<()> {
    let suggestion = classifier.suggest_crime_category(text);

    if json {
        let scores: serde_json::Map<String, serde_json::Value> = classifier
            .crime_scores(text)
            .into_iter()
            .map(|(category, hits)| (category.as_str().to_string(), json!(hits)))
            .collect();
        return print_json(&json!({
            "suggestion": suggestion,
            "scores": scores,
        }));
    }

    match suggestion {
        Some(category) => println!("Suggested category: {}", category.label()),
        None => println!("No category suggestion"),
    }
    Ok(())
}
