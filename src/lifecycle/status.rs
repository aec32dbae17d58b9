//! Adapter from the store's status vocabulary to [`CanonicalState`]
//!
//! The external store writes free-form status strings. They are wrapped in
//! [`RawStatus`] at the boundary and converted exactly once; business logic
//! only ever sees the closed enum.

use crate::types::CanonicalState;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Status token as written by the external store. Not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawStatus(pub String);

impl RawStatus {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical lifecycle state for this token
    pub fn canonical(&self) -> CanonicalState {
        canonicalize(&self.0)
    }

    /// Staff-facing label in the store's own vocabulary
    ///
    /// Unknown tokens are shown verbatim.
    pub fn label(&self) -> &str {
        match self.0.as_str() {
            "pending" => "Pending Review",
            "under-investigation" => "Under Investigation",
            "resolved" => "Resolved",
            "closed" => "Closed",
            other => other,
        }
    }
}

impl From<&str> for RawStatus {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for RawStatus {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<CanonicalState> for RawStatus {
    fn from(state: CanonicalState) -> Self {
        Self(state.raw_token().to_string())
    }
}

/// Map a store status token onto the lifecycle
///
/// Total: anything outside the four known tokens, including the empty
/// string, is treated as `Reviewing`.
pub fn canonicalize(raw: &str) -> CanonicalState {
    match raw {
        "pending" => CanonicalState::Reviewing,
        "under-investigation" => CanonicalState::Investigating,
        "resolved" => CanonicalState::Solved,
        "closed" => CanonicalState::Closed,
        other => {
            if !other.is_empty() {
                warn!("Unrecognized report status '{}', treating as reviewing", other);
            }
            CanonicalState::Reviewing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens() {
        assert_eq!(canonicalize("pending"), CanonicalState::Reviewing);
        assert_eq!(canonicalize("under-investigation"), CanonicalState::Investigating);
        assert_eq!(canonicalize("resolved"), CanonicalState::Solved);
        assert_eq!(canonicalize("closed"), CanonicalState::Closed);
    }

    #[test]
    fn test_unknown_tokens_default_to_reviewing() {
        assert_eq!(canonicalize(""), CanonicalState::Reviewing);
        assert_eq!(canonicalize("bogus"), CanonicalState::Reviewing);
        assert_eq!(canonicalize("Closed"), CanonicalState::Reviewing);
        assert_eq!(canonicalize(" resolved "), CanonicalState::Reviewing);
    }

    #[test]
    fn test_raw_token_round_trips() {
        for state in CanonicalState::ALL {
            assert_eq!(RawStatus::from(state).canonical(), state);
        }
    }

    #[test]
    fn test_raw_status_label() {
        assert_eq!(RawStatus::from("pending").label(), "Pending Review");
        assert_eq!(
            RawStatus::from("under-investigation").label(),
            "Under Investigation"
        );
        assert_eq!(RawStatus::from("escalated").label(), "escalated");
    }

    #[test]
    fn test_raw_status_is_transparent() {
        let raw: RawStatus = serde_json::from_str("\"resolved\"").unwrap();
        assert_eq!(raw.as_str(), "resolved");
        assert_eq!(raw.canonical(), CanonicalState::Solved);
    }
}
