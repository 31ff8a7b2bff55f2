// crates/core/src/stats/sessions.rs
//! Session totals and averages.

use serde::{Deserialize, Serialize};

use super::rounded_mean;
use crate::types::SessionRecord;

/// Totals and averages over a user's focus sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAggregate {
    /// Sum of actual minutes; a missing duration counts as 0.
    pub total_minutes: i64,
    /// Number of sessions, including those without a duration.
    pub total_sessions: usize,
    /// Mean self rating over rated sessions. `None` renders as "n/a".
    pub avg_rating: Option<f64>,
    /// Mean distraction count over sessions that recorded one.
    pub avg_distractions: Option<f64>,
}

/// Reduce session records into totals and averages.
pub fn aggregate_sessions(sessions: &[SessionRecord]) -> SessionAggregate {
    SessionAggregate {
        total_minutes: sessions
            .iter()
            .map(|s| s.actual_duration_minutes.unwrap_or(0))
            .sum(),
        total_sessions: sessions.len(),
        avg_rating: rounded_mean(sessions.iter().filter_map(|s| s.self_rating)),
        avg_distractions: rounded_mean(sessions.iter().filter_map(|s| s.distractions_count)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn session(minutes: Option<i64>, rating: Option<i64>, distractions: Option<i64>) -> SessionRecord {
        SessionRecord {
            id: format!("s-{:?}-{:?}-{:?}", minutes, rating, distractions),
            created_at: Utc.with_ymd_and_hms(2026, 5, 4, 10, 0, 0).unwrap(),
            actual_duration_minutes: minutes,
            self_rating: rating,
            distractions_count: distractions,
        }
    }

    #[test]
    fn test_empty_sessions() {
        let agg = aggregate_sessions(&[]);
        assert_eq!(agg.total_minutes, 0);
        assert_eq!(agg.total_sessions, 0);
        assert_eq!(agg.avg_rating, None);
        assert_eq!(agg.avg_distractions, None);
    }

    #[test]
    fn test_null_duration_counts_as_zero_but_still_a_session() {
        let sessions = vec![
            session(Some(50), Some(7), Some(1)),
            session(None, Some(8), None),
            session(Some(25), None, Some(3)),
        ];
        let agg = aggregate_sessions(&sessions);
        assert_eq!(agg.total_minutes, 75);
        assert_eq!(agg.total_sessions, 3);
    }

    #[test]
    fn test_all_ratings_null_is_absent_not_zero() {
        let sessions = vec![session(Some(30), None, None), session(Some(45), None, None)];
        let agg = aggregate_sessions(&sessions);
        assert_eq!(agg.avg_rating, None);
        assert_eq!(agg.avg_distractions, None);
    }

    #[test]
    fn test_rating_mean_half_is_exact() {
        let sessions = vec![session(None, Some(7), None), session(None, Some(8), None)];
        assert_eq!(aggregate_sessions(&sessions).avg_rating, Some(7.5));
    }

    #[test]
    fn test_rating_mean_rounds_to_one_decimal() {
        let sessions = vec![
            session(None, Some(7), None),
            session(None, Some(7), None),
            session(None, Some(8), None),
        ];
        assert_eq!(aggregate_sessions(&sessions).avg_rating, Some(7.3));
    }

    #[test]
    fn test_averages_skip_missing_values_only() {
        let sessions = vec![
            session(Some(50), Some(9), Some(0)),
            session(Some(50), None, Some(4)),
            session(Some(50), Some(6), None),
        ];
        let agg = aggregate_sessions(&sessions);
        assert_eq!(agg.avg_rating, Some(7.5));
        assert_eq!(agg.avg_distractions, Some(2.0));
    }

    #[test]
    fn test_serializes_absent_average_as_null() {
        let agg = aggregate_sessions(&[session(Some(10), None, None)]);
        let json = serde_json::to_value(&agg).unwrap();
        assert_eq!(json["totalMinutes"], 10);
        assert_eq!(json["totalSessions"], 1);
        assert!(json["avgRating"].is_null());
    }
}
