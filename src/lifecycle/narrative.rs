//! Status history shown on the tracking view
//!
//! One milestone per lifecycle stage reached, dated one day apart starting
//! from the report's creation date. Regenerated on every view; entries are
//! never stored or edited.

use crate::types::{CanonicalState, StatusUpdateEntry};
use chrono::{DateTime, Duration, Utc};

const RECEIVED: &str = "Your report has been received and is being processed.";
const ASSIGNED: &str = "Your report has been assigned to an investigator.";
const COMMENCED: &str = "Investigation has commenced based on the provided information.";
const CONCLUDED: &str = "Investigation has concluded. Thank you for your report.";

/// Milestones reached by each state, oldest first
///
/// A solved case skips "commenced" so its last entry tells the reporter the
/// investigation concluded.
fn milestones(state: CanonicalState) -> &'static [&'static str] {
    match state {
        CanonicalState::Reviewing => &[RECEIVED],
        CanonicalState::Investigating => &[RECEIVED, ASSIGNED],
        CanonicalState::Solved => &[RECEIVED, ASSIGNED, CONCLUDED],
        CanonicalState::Closed => &[RECEIVED, ASSIGNED, COMMENCED, CONCLUDED],
    }
}

/// Build the status history for a report in `state` created at `created_at`
///
/// Always 1 to 4 entries, in strictly increasing date order.
pub fn generate_updates(state: CanonicalState, created_at: DateTime<Utc>) -> Vec<StatusUpdateEntry> {
    let created = created_at.date_naive();

    milestones(state)
        .iter()
        .enumerate()
        .map(|(offset, message)| StatusUpdateEntry {
            date: created + Duration::days(offset as i64),
            message: (*message).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn april_first() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 1, 14, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_entry_count_per_state() {
        let counts: Vec<usize> = CanonicalState::ALL
            .iter()
            .map(|s| generate_updates(*s, april_first()).len())
            .collect();
        assert_eq!(counts, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_solved_dates() {
        let updates = generate_updates(CanonicalState::Solved, april_first());
        let dates: Vec<NaiveDate> = updates.iter().map(|u| u.date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 4, 1), date(2025, 4, 2), date(2025, 4, 3)]
        );
    }

    #[test]
    fn test_solved_history_ends_concluded() {
        let updates = generate_updates(CanonicalState::Solved, april_first());
        assert!(updates[1].message.contains("assigned to an investigator"));
        assert!(updates[2].message.contains("concluded"));
        assert!(updates.iter().all(|u| !u.message.contains("commenced")));
    }

    #[test]
    fn test_terminal_states_end_concluded() {
        for state in CanonicalState::ALL {
            let updates = generate_updates(state, april_first());
            let last = &updates[updates.len() - 1].message;
            assert_eq!(state.is_terminal(), last.contains("concluded"), "{:?}", state);
        }
    }

    #[test]
    fn test_closed_history() {
        let updates = generate_updates(CanonicalState::Closed, april_first());
        assert_eq!(updates.len(), 4);
        assert_eq!(updates[0].date, date(2025, 4, 1));
        assert!(updates[0].message.contains("received and is being processed"));
        assert!(updates[1].message.contains("assigned to an investigator"));
        assert!(updates[2].message.contains("commenced"));
        assert!(updates[3].message.contains("concluded"));
    }

    #[test]
    fn test_month_boundary() {
        let created = Utc.with_ymd_and_hms(2024, 2, 28, 23, 59, 0).unwrap();
        let updates = generate_updates(CanonicalState::Closed, created);
        assert_eq!(updates[1].date, date(2024, 2, 29));
        assert_eq!(updates[2].date, date(2024, 3, 1));
    }

    #[test]
    fn test_regeneration_is_identical() {
        let first = generate_updates(CanonicalState::Investigating, april_first());
        let second = generate_updates(CanonicalState::Investigating, april_first());
        assert_eq!(first, second);
    }
}
