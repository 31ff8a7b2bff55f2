// crates/core/src/stats/summary.rs
//! Plain-text statistics block embedded in the coach prompt.
//!
//! The output carries no timestamps or other varying content, so the same
//! input always renders the same bytes.

use super::sessions::SessionAggregate;
use crate::types::ConditionStat;

/// Line emitted when no condition has been ranked yet.
pub const NO_RUNS_LINE: &str = "No experiment runs yet — Coach should suggest what to test.";

fn or_na(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

/// Render the aggregate and ranked conditions as the fixed-shape summary.
pub fn format_stats_summary(aggregate: &SessionAggregate, top_conditions: &[ConditionStat]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total sessions: {}\n", aggregate.total_sessions));
    out.push_str(&format!("Total focus minutes: {}\n", aggregate.total_minutes));
    out.push_str(&format!("Average focus rating: {}\n", or_na(aggregate.avg_rating)));
    out.push_str(&format!(
        "Average distractions per session: {}",
        or_na(aggregate.avg_distractions)
    ));

    if top_conditions.is_empty() {
        out.push('\n');
        out.push_str(NO_RUNS_LINE);
    } else {
        out.push_str("\nTop experiment conditions:");
        for c in top_conditions {
            out.push_str(&format!(
                "\n- {} ({}/10 over {} runs) in \"{}\"",
                c.condition, c.avg_rating, c.run_count, c.experiment_name
            ));
        }
    }
    out
}
