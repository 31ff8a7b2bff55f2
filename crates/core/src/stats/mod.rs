// crates/core/src/stats/mod.rs
//! Statistics core behind the dashboard, insights and coach pages.
//!
//! Every function here is a pure reduction over records that were already
//! fetched for one user:
//!
//! - [`aggregate_sessions`] — totals and averages over focus sessions
//! - [`rank_conditions`] — top-K (experiment, condition) groups by mean rating
//! - [`format_stats_summary`] — the fixed text block handed to the coach
//! - [`focus_by_day`] — daily focus minutes for the insights chart
//! - [`condition_breakdown`] — per-condition stats for one experiment

pub mod conditions;
pub mod daily;
pub mod sessions;
pub mod summary;

pub use conditions::{
    condition_breakdown, rank_conditions, ConditionBreakdown, COACH_TOP_K, INSIGHTS_TOP_K,
    UNKNOWN_EXPERIMENT,
};
pub use daily::{focus_by_day, FocusDay, INSIGHTS_WINDOW_DAYS};
pub use sessions::{aggregate_sessions, SessionAggregate};
pub use summary::{format_stats_summary, NO_RUNS_LINE};

/// Round half away from zero to one decimal place.
///
/// Applied once on a final mean, never on partial sums.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of the present values, rounded to one decimal.
///
/// `None` when no value is present; an empty set never averages to zero.
pub(crate) fn rounded_mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = i64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0i64, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return None;
    }
    Some(round_one_decimal(sum as f64 / count as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(7.5), 7.5);
        assert_eq!(round_one_decimal(22.0 / 3.0), 7.3);
        assert_eq!(round_one_decimal(7.25), 7.3);
        assert_eq!(round_one_decimal(7.04), 7.0);
        assert_eq!(round_one_decimal(-0.25), -0.3);
    }

    #[test]
    fn test_rounded_mean_empty_is_none() {
        assert_eq!(rounded_mean(Vec::<i64>::new()), None);
    }

    #[test]
    fn test_rounded_mean_single() {
        assert_eq!(rounded_mean([9]), Some(9.0));
    }
}
