// crates/core/src/stats/daily.rs
//! Daily focus minutes for the insights chart.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::SessionRecord;

/// Days shown on the insights chart.
pub const INSIGHTS_WINDOW_DAYS: u32 = 14;

/// Focus minutes logged on one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusDay {
    /// `YYYY-MM-DD`
    pub date_key: String,
    /// `M/D`, no zero padding.
    pub label: String,
    pub minutes: i64,
}

/// Bucket session minutes by UTC day over the `days` days ending at `today`,
/// oldest first. Days without sessions report zero minutes.
pub fn focus_by_day(sessions: &[SessionRecord], today: NaiveDate, days: u32) -> Vec<FocusDay> {
    let mut by_date: HashMap<NaiveDate, i64> = HashMap::new();
    for s in sessions {
        *by_date.entry(s.created_at.date_naive()).or_default() +=
            s.actual_duration_minutes.unwrap_or(0);
    }

    (0..days)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(i64::from(offset));
            FocusDay {
                date_key: day.format("%Y-%m-%d").to_string(),
                label: format!("{}/{}", day.month(), day.day()),
                minutes: by_date.get(&day).copied().unwrap_or(0),
            }
        })
        .collect()
}
