// crates/core/src/stats/conditions.rs
//! Experiment condition ranking.
//!
//! Runs are grouped by the ordered pair (experiment id, condition label).
//! Labels are matched exactly: `" Red "` and `"Red"` are different groups,
//! and two experiments may reuse the same label without colliding.
//!
//! Groups with equal mean ratings keep the order in which their first rated
//! run appears in the input (the sort is stable).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{round_one_decimal, rounded_mean};
use crate::types::{ConditionStat, ExperimentRecord, ExperimentRunRecord};

/// Display name for runs whose experiment is not in the lookup.
pub const UNKNOWN_EXPERIMENT: &str = "Unknown experiment";

/// Number of conditions embedded in the coach summary.
pub const COACH_TOP_K: usize = 3;

/// Number of conditions shown on the insights page.
pub const INSIGHTS_TOP_K: usize = 5;

#[derive(Debug)]
struct Group<'a> {
    experiment_id: &'a str,
    condition: &'a str,
    sum: i64,
    count: usize,
}

/// Rank (experiment, condition) groups by mean rating, best first, keeping
/// at most `k` entries.
///
/// Runs without a rating are dropped before grouping. An empty experiment
/// list or an empty run list yields an empty ranking.
pub fn rank_conditions(
    experiments: &[ExperimentRecord],
    runs: &[ExperimentRunRecord],
    k: usize,
) -> Vec<ConditionStat> {
    if experiments.is_empty() || runs.is_empty() {
        return Vec::new();
    }

    let names: HashMap<&str, &str> = experiments
        .iter()
        .map(|e| (e.id.as_str(), e.name.as_str()))
        .collect();

    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut groups: Vec<Group<'_>> = Vec::new();

    for run in runs {
        let Some(rating) = run.rating else {
            continue;
        };
        let key = (run.experiment_id.as_str(), run.condition_label.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                experiment_id: key.0,
                condition: key.1,
                sum: 0,
                count: 0,
            });
            groups.len() - 1
        });
        groups[slot].sum += rating;
        groups[slot].count += 1;
    }

    let mut stats: Vec<ConditionStat> = groups
        .into_iter()
        .map(|g| ConditionStat {
            experiment_name: names
                .get(g.experiment_id)
                .copied()
                .unwrap_or(UNKNOWN_EXPERIMENT)
                .to_string(),
            condition: g.condition.to_string(),
            avg_rating: round_one_decimal(g.sum as f64 / g.count as f64),
            run_count: g.count,
        })
        .collect();

    stats.sort_by(|a, b| b.avg_rating.total_cmp(&a.avg_rating));
    stats.truncate(k);
    stats
}

/// Per-condition numbers for a single experiment's card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionBreakdown {
    pub condition: String,
    /// Every run logged under this label, rated or not.
    pub run_count: usize,
    /// Runs that carry a rating.
    pub rated_count: usize,
    /// Mean over rated runs; `None` when no run is rated.
    pub avg_rating: Option<f64>,
}

/// Break one experiment's runs down by condition label, in the order each
/// label first appears.
pub fn condition_breakdown(runs: &[ExperimentRunRecord]) -> Vec<ConditionBreakdown> {
    let mut order: Vec<&str> = Vec::new();
    let mut by_label: HashMap<&str, Vec<Option<i64>>> = HashMap::new();

    for run in runs {
        let label = run.condition_label.as_str();
        by_label
            .entry(label)
            .or_insert_with(|| {
                order.push(label);
                Vec::new()
            })
            .push(run.rating);
    }

    order
        .into_iter()
        .map(|label| {
            let ratings = &by_label[label];
            ConditionBreakdown {
                condition: label.to_string(),
                run_count: ratings.len(),
                rated_count: ratings.iter().flatten().count(),
                avg_rating: rounded_mean(ratings.iter().flatten().copied()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exp(id: &str, name: &str) -> ExperimentRecord {
        ExperimentRecord {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn run(id: &str, experiment_id: &str, condition: &str, rating: Option<i64>) -> ExperimentRunRecord {
        ExperimentRunRecord {
            id: id.to_string(),
            experiment_id: experiment_id.to_string(),
            condition_label: condition.to_string(),
            rating,
        }
    }

    #[test]
    fn test_ranks_descending_by_mean() {
        let experiments = vec![exp("A", "Lighting")];
        let runs = vec![
            run("r1", "A", "X", Some(8)),
            run("r2", "A", "X", Some(6)),
            run("r3", "A", "Y", Some(10)),
        ];
        let ranked = rank_conditions(&experiments, &runs, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].condition, "Y");
        assert_eq!(ranked[0].avg_rating, 10.0);
        assert_eq!(ranked[0].run_count, 1);
        assert_eq!(ranked[1].condition, "X");
        assert_eq!(ranked[1].avg_rating, 7.0);
        assert_eq!(ranked[1].run_count, 2);
        assert!(ranked.iter().all(|s| s.experiment_name == "Lighting"));
    }

    #[test]
    fn test_null_ratings_are_excluded() {
        let experiments = vec![exp("A", "Lighting")];
        let runs = vec![
            run("r1", "A", "X", Some(8)),
            run("r2", "A", "X", None),
            run("r3", "A", "Z", None),
        ];
        let ranked = rank_conditions(&experiments, &runs, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].run_count, 1);
        assert_eq!(ranked[0].avg_rating, 8.0);
    }

    #[test]
    fn test_unknown_experiment_fallback() {
        let experiments = vec![exp("A", "Lighting")];
        let runs = vec![run("r1", "ghost", "X", Some(5))];
        let ranked = rank_conditions(&experiments, &runs, 3);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].experiment_name, UNKNOWN_EXPERIMENT);
    }

    #[test]
    fn test_same_label_in_two_experiments_does_not_collide() {
        let experiments = vec![exp("A", "Lighting"), exp("B", "Music")];
        let runs = vec![run("r1", "A", "Red", Some(9)), run("r2", "B", "Red", Some(3))];
        let ranked = rank_conditions(&experiments, &runs, 5);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].experiment_name, "Lighting");
        assert_eq!(ranked[1].experiment_name, "Music");
    }

    #[test]
    fn test_labels_are_not_normalized() {
        let experiments = vec![exp("A", "Lighting")];
        let runs = vec![
            run("r1", "A", "Red", Some(6)),
            run("r2", "A", " Red ", Some(8)),
            run("r3", "A", "red", Some(7)),
        ];
        let ranked = rank_conditions(&experiments, &runs, 5);
        assert_eq!(ranked.len(), 3);
        let labels: Vec<&str> = ranked.iter().map(|s| s.condition.as_str()).collect();
        assert_eq!(labels, vec![" Red ", "red", "Red"]);
    }

    #[test]
    fn test_ties_keep_first_encountered_order() {
        let experiments = vec![exp("A", "Lighting")];
        let runs = vec![
            run("r1", "A", "Blue", None),
            run("r2", "A", "Green", Some(7)),
            run("r3", "A", "Blue", Some(7)),
            run("r4", "A", "Amber", Some(7)),
        ];
        let ranked = rank_conditions(&experiments, &runs, 5);
        let labels: Vec<&str> = ranked.iter().map(|s| s.condition.as_str()).collect();
        assert_eq!(labels, vec!["Green", "Blue", "Amber"]);
    }

    #[test]
    fn test_truncates_to_k() {
        let experiments = vec![exp("A", "Lighting")];
        let runs: Vec<_> = (1..=8)
            .map(|i| run(&format!("r{i}"), "A", &format!("C{i}"), Some(i)))
            .collect();
        let ranked = rank_conditions(&experiments, &runs, COACH_TOP_K);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].condition, "C8");
        assert_eq!(rank_conditions(&experiments, &runs, INSIGHTS_TOP_K).len(), 5);
        assert!(rank_conditions(&experiments, &runs, 0).is_empty());
    }

    #[test]
    fn test_mean_is_rounded_once() {
        let experiments = vec![exp("A", "Lighting")];
        let runs = vec![
            run("r1", "A", "X", Some(7)),
            run("r2", "A", "X", Some(7)),
            run("r3", "A", "X", Some(8)),
        ];
        assert_eq!(rank_conditions(&experiments, &runs, 1)[0].avg_rating, 7.3);
    }

    #[test]
    fn test_empty_inputs() {
        let experiments = vec![exp("A", "Lighting")];
        let runs = vec![run("r1", "A", "X", Some(7))];
        assert!(rank_conditions(&[], &runs, 3).is_empty());
        assert!(rank_conditions(&experiments, &[], 3).is_empty());
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let experiments = vec![exp("A", "Lighting"), exp("B", "Music")];
        let runs = vec![
            run("r1", "A", "Red", Some(9)),
            run("r2", "B", "Lofi", Some(9)),
            run("r3", "A", "Blue", Some(4)),
            run("r4", "B", "Silence", Some(6)),
        ];
        let first = rank_conditions(&experiments, &runs, 3);
        let second = rank_conditions(&experiments, &runs, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_breakdown_counts_unrated_runs() {
        let runs = vec![
            run("r1", "A", "Red lamp", Some(8)),
            run("r2", "A", "Blue LED", None),
            run("r3", "A", "Red lamp", Some(7)),
            run("r4", "A", "Red lamp", None),
        ];
        let breakdown = condition_breakdown(&runs);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].condition, "Red lamp");
        assert_eq!(breakdown[0].run_count, 3);
        assert_eq!(breakdown[0].rated_count, 2);
        assert_eq!(breakdown[0].avg_rating, Some(7.5));
        assert_eq!(breakdown[1].condition, "Blue LED");
        assert_eq!(breakdown[1].run_count, 1);
        assert_eq!(breakdown[1].avg_rating, None);
    }

    #[test]
    fn test_breakdown_empty() {
        assert!(condition_breakdown(&[]).is_empty());
    }
}
