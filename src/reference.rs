//! Report reference identifiers
//!
//! References look like `RPT-AB12CD34`: a fixed prefix, a dash, and
//! uppercase ASCII letters or digits. They are what a reporter keeps to
//! track a report and what case-related feedback must cite.

use crate::error::{Result, SafespeakError};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Shape of generated and accepted references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceFormat {
    /// Leading tag before the dash
    pub prefix: String,

    /// Length of generated suffixes
    pub suffix_len: usize,
}

impl Default for ReferenceFormat {
    fn default() -> Self {
        Self {
            prefix: "RPT".to_string(),
            suffix_len: 8,
        }
    }
}

/// A reference that matched [`ReferenceFormat`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportReference(String);

impl ReportReference {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReportReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ReferenceFormat {
    fn pattern(&self) -> Result<Regex> {
        Regex::new(&format!("^{}-[A-Z0-9]+$", regex::escape(&self.prefix)))
            .map_err(|e| SafespeakError::Other(format!("Invalid reference pattern: {}", e)))
    }

    /// Draw a fresh reference
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> ReportReference {
        let suffix: String = (0..self.suffix_len)
            .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect();
        ReportReference(format!("{}-{}", self.prefix, suffix))
    }

    /// Check a user-supplied reference
    ///
    /// Surrounding whitespace is ignored; case is not.
    pub fn validate(&self, candidate: &str) -> Result<ReportReference> {
        let trimmed = candidate.trim();
        if self.pattern()?.is_match(trimmed) {
            Ok(ReportReference(trimmed.to_string()))
        } else {
            Err(SafespeakError::InvalidReference(format!(
                "'{}' should look like {}-XXXXXXXX",
                trimmed, self.prefix
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_references_validate() {
        let format = ReferenceFormat::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let reference = format.generate(&mut rng);
            assert!(reference.as_str().starts_with("RPT-"));
            assert_eq!(reference.as_str().len(), 12);
            assert_eq!(format.validate(reference.as_str()).unwrap(), reference);
        }
    }

    #[test]
    fn test_validate_rejects_malformed() {
        let format = ReferenceFormat::default();
        assert!(format.validate("RPT-").is_err());
        assert!(format.validate("rpt-AB12CD34").is_err());
        assert!(format.validate("RPT-ab12cd34").is_err());
        assert!(format.validate("CASE-AB12CD34").is_err());
        assert!(format.validate("").is_err());
    }

    #[test]
    fn test_validate_trims() {
        let format = ReferenceFormat::default();
        let reference = format.validate("  RPT-A1B2C3 ").unwrap();
        assert_eq!(reference.as_str(), "RPT-A1B2C3");
    }

    #[test]
    fn test_custom_prefix_is_escaped() {
        let format = ReferenceFormat {
            prefix: "R.P".to_string(),
            suffix_len: 4,
        };
        assert!(format.validate("R.P-AB12").is_ok());
        assert!(format.validate("RXP-AB12").is_err());
    }
}
