//! Feedback submission policy
//!
//! Sits on top of the classifier the way the feedback form does: it decides
//! whether a message can be submitted, and turns "reference required but
//! missing" into a user-facing error.

use crate::classifier::TextClassifier;
use crate::error::{Result, SafespeakError};
use crate::reference::{ReferenceFormat, ReportReference};
use crate::types::ClassificationResult;
use serde::Serialize;
use tracing::{debug, info};

/// Shortest message the form accepts
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Longest message the form accepts
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Accepted feedback, ready to hand to the store
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDecision {
    /// `None` when the message was too short to classify
    pub classification: Option<ClassificationResult>,

    pub reference: Option<ReportReference>,
}

/// Applies the submission rules to a message and optional reference
#[derive(Debug, Clone, Default)]
pub struct FeedbackGate {
    classifier: TextClassifier,
    references: ReferenceFormat,
}

impl FeedbackGate {
    pub fn new(classifier: TextClassifier, references: ReferenceFormat) -> Self {
        Self {
            classifier,
            references,
        }
    }

    /// Decide whether `message` may be submitted
    ///
    /// Rules, in order:
    /// 1. message length within the form limits
    /// 2. interface feedback is rejected
    /// 3. case-related feedback needs a reference
    /// 4. any supplied reference must be well-formed
    pub fn check(&self, message: &str, reference: Option<&str>) -> Result<FeedbackDecision> {
        // Same text the classifier sees, whitespace included
        let length = message.chars().count();
        if length < MIN_MESSAGE_CHARS {
            return Err(SafespeakError::InvalidMessage(format!(
                "Message must be at least {} characters",
                MIN_MESSAGE_CHARS
            )));
        }
        if length > MAX_MESSAGE_CHARS {
            return Err(SafespeakError::InvalidMessage(format!(
                "Message must not be longer than {} characters",
                MAX_MESSAGE_CHARS
            )));
        }

        let classification = self.classifier.classify(message);
        let reference = reference.map(str::trim).filter(|r| !r.is_empty());

        if let Some(result) = &classification {
            if !result.category.is_case_related() {
                debug!("Rejecting interface feedback");
                return Err(SafespeakError::InterfaceFeedbackRejected);
            }
            if result.requires_reference && reference.is_none() {
                return Err(SafespeakError::ReferenceRequired);
            }
        }

        let reference = reference
            .map(|r| self.references.validate(r))
            .transpose()?;

        info!(
            "Feedback accepted (category={})",
            classification
                .map(|c| c.category.as_str())
                .unwrap_or("unclassified")
        );

        Ok(FeedbackDecision {
            classification,
            reference,
        })
    }
}
