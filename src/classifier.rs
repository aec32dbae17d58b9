//! Keyword-presence classification of free text
//!
//! Scores text by counting how many distinct lexicon stems occur in it,
//! bucket by bucket. The classifier holds no state between calls, so the
//! caller simply re-invokes it whenever the input changes.

use crate::lexicon::{CrimeLexicon, FeedbackLexicon};
use crate::types::{ClassificationResult, CrimeCategory, FeedbackCategory};
use serde::{Deserialize, Serialize};
use tracing::debug;

const INVESTIGATION_CONFIDENCE: f32 = 0.85;
const ADMIN_CONFIDENCE: f32 = 0.80;
const RESOLUTION_CONFIDENCE: f32 = 0.75;
const INTERFACE_CONFIDENCE: f32 = 0.90;
const FALLBACK_CONFIDENCE: f32 = 0.60;

/// Classifier settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Text must be longer than this many characters before it is analyzed
    pub min_text_length: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { min_text_length: 15 }
    }
}

/// Distinct keyword hits per feedback bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordScore {
    pub case_count: usize,
    pub interface_count: usize,
}

/// Free-text classifier over the static lexicon
#[derive(Debug, Clone, Default)]
pub struct TextClassifier {
    config: ClassifierConfig,
}

impl TextClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Whether the text is long enough to be worth classifying
    pub fn is_analyzable(&self, text: &str) -> bool {
        text.chars().count() > self.config.min_text_length
    }

    /// Count distinct case and interface stems present in the text
    pub fn score(&self, text: &str) -> KeywordScore {
        let lowered = text.to_lowercase();
        KeywordScore {
            case_count: count_present(&lowered, FeedbackLexicon::case_keywords().iter().copied()),
            interface_count: count_present(
                &lowered,
                FeedbackLexicon::interface_keywords().iter().copied(),
            ),
        }
    }

    /// Classify feedback text
    ///
    /// Returns `None` while the text is at or below the length threshold.
    /// Otherwise always returns a result; text with no signal falls back to
    /// a low-confidence `Resolution`.
    pub fn classify(&self, text: &str) -> Option<ClassificationResult> {
        if !self.is_analyzable(text) {
            return None;
        }

        let lowered = text.to_lowercase();
        let score = self.score(&lowered);

        let result = if score.case_count > score.interface_count {
            if contains_any(&lowered, FeedbackLexicon::investigation_markers()) {
                ClassificationResult::new(
                    FeedbackCategory::Investigation,
                    INVESTIGATION_CONFIDENCE,
                    true,
                )
            } else if contains_any(&lowered, FeedbackLexicon::admin_markers()) {
                ClassificationResult::new(FeedbackCategory::AdminBehavior, ADMIN_CONFIDENCE, true)
            } else {
                ClassificationResult::new(FeedbackCategory::Resolution, RESOLUTION_CONFIDENCE, true)
            }
        } else if score.interface_count > 0 {
            ClassificationResult::new(FeedbackCategory::Interface, INTERFACE_CONFIDENCE, false)
        } else {
            // Covers 0/0 and ties, including non-zero ties.
            ClassificationResult::new(FeedbackCategory::Resolution, FALLBACK_CONFIDENCE, true)
        };

        debug!(
            "Classified feedback as {} (case={}, interface={}, confidence={:.2})",
            result.category, score.case_count, score.interface_count, result.confidence
        );

        Some(result)
    }

    /// Distinct keyword hits for every crime category, in form order
    pub fn crime_scores(&self, text: &str) -> Vec<(CrimeCategory, usize)> {
        let lowered = text.to_lowercase();
        CrimeCategory::ALL
            .iter()
            .map(|category| {
                let hits = count_present(&lowered, CrimeLexicon::keywords(*category).iter().copied());
                (*category, hits)
            })
            .collect()
    }

    /// Suggest a report category from its description
    ///
    /// Only a strict winner is suggested; any tie for the top score,
    /// including the all-zero case, yields `None`.
    pub fn suggest_crime_category(&self, text: &str) -> Option<CrimeCategory> {
        if !self.is_analyzable(text) {
            return None;
        }

        let scores = self.crime_scores(text);
        let best = scores.iter().map(|(_, hits)| *hits).max().unwrap_or(0);
        if best == 0 {
            return None;
        }

        let mut leaders = scores.iter().filter(|(_, hits)| *hits == best);
        let winner = leaders.next().map(|(category, _)| *category);
        if leaders.next().is_some() {
            debug!("No category suggestion: tie at {} keyword(s)", best);
            return None;
        }

        if let Some(category) = winner {
            debug!("Suggested category {} with {} keyword(s)", category, best);
        }
        winner
    }
}

/// Classify with the default configuration
pub fn classify(text: &str) -> Option<ClassificationResult> {
    TextClassifier::default().classify(text)
}

/// Suggest a crime category with the default configuration
pub fn suggest_crime_category(text: &str) -> Option<CrimeCategory> {
    TextClassifier::default().suggest_crime_category(text)
}

/// Number of keywords that occur at least once in `haystack`
fn count_present<'a>(haystack: &str, keywords: impl Iterator<Item = &'a str>) -> usize {
    keywords.filter(|keyword| haystack.contains(keyword)).count()
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_not_classified() {
        let classifier = TextClassifier::default();
        assert_eq!(classifier.classify(""), None);
        assert_eq!(classifier.classify("bad officer"), None);
        // Exactly at the threshold is still too short
        assert_eq!(classifier.classify("officer is rude"), None);
        assert!(classifier.classify("officer is rude!").is_some());
    }

    #[test]
    fn test_threshold_counts_characters_not_bytes() {
        let classifier = TextClassifier::default();
        // 15 characters, 30 bytes
        let text = "ééééééééééééééé";
        assert_eq!(text.chars().count(), 15);
        assert_eq!(classifier.classify(text), None);
    }

    #[test]
    fn test_investigation_feedback() {
        let result =
            classify("The investigator never followed up on my case and the officer was rude")
                .unwrap();
        assert_eq!(result.category, FeedbackCategory::Investigation);
        assert_eq!(result.confidence, 0.85);
        assert!(result.requires_reference);
    }

    #[test]
    fn test_admin_feedback() {
        let result = classify("The officer who handled my report was dismissive").unwrap();
        assert_eq!(result.category, FeedbackCategory::AdminBehavior);
        assert_eq!(result.confidence, 0.80);
        assert!(result.requires_reference);
    }

    #[test]
    fn test_resolution_feedback() {
        let result = classify("My case was solved quickly, thank you all").unwrap();
        assert_eq!(result.category, FeedbackCategory::Resolution);
        assert_eq!(result.confidence, 0.75);
        assert!(result.requires_reference);
    }

    #[test]
    fn test_interface_feedback() {
        let result = classify("The app is confusing and the button layout is bad").unwrap();
        assert_eq!(result.category, FeedbackCategory::Interface);
        assert_eq!(result.confidence, 0.90);
        assert!(!result.requires_reference);
    }

    #[test]
    fn test_no_keywords_falls_back() {
        let result = classify("Thank you very much for everything").unwrap();
        assert_eq!(result.category, FeedbackCategory::Resolution);
        assert_eq!(result.confidence, 0.60);
        assert!(result.requires_reference);
    }

    #[test]
    fn test_nonzero_tie_falls_back() {
        let classifier = TextClassifier::default();
        let text = "The police website was terrible";
        assert_eq!(
            classifier.score(text),
            KeywordScore {
                case_count: 1,
                interface_count: 1
            }
        );
        let result = classifier.classify(text).unwrap();
        assert_eq!(result.category, FeedbackCategory::Resolution);
        assert_eq!(result.confidence, 0.60);
    }

    #[test]
    fn test_repeated_keywords_count_once() {
        let classifier = TextClassifier::default();
        let score = classifier.score("case case case CASE app");
        assert_eq!(score.case_count, 1);
        assert_eq!(score.interface_count, 1);
    }

    #[test]
    fn test_custom_threshold() {
        let classifier = TextClassifier::new(ClassifierConfig { min_text_length: 3 });
        let result = classifier.classify("slow app").unwrap();
        assert_eq!(result.category, FeedbackCategory::Interface);
    }

    #[test]
    fn test_suggest_crime_category() {
        assert_eq!(
            suggest_crime_category("Someone stole my bike, it was stolen from the rack"),
            Some(CrimeCategory::Theft)
        );
        assert_eq!(
            suggest_crime_category("I received a phishing email and my password was changed"),
            Some(CrimeCategory::Cybercrime)
        );
        assert_eq!(
            suggest_crime_category("Toxic waste was dumped into the river"),
            Some(CrimeCategory::Environmental)
        );
    }

    #[test]
    fn test_suggest_crime_category_without_winner() {
        // No keywords at all
        assert_eq!(suggest_crime_category("Something happened near my house"), None);
        // One theft stem, one assault stem
        assert_eq!(
            suggest_crime_category("He was robbed and then punched in the street"),
            None
        );
        // Too short
        assert_eq!(suggest_crime_category("drug deal"), None);
    }
}
