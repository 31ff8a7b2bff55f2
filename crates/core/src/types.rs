// crates/core/src/types.rs
//! Record shapes consumed by the statistics core.
//!
//! These are the already-deserialized rows handed over by the persistence
//! layer. Every numeric field that a user may leave blank is an `Option`;
//! the aggregation functions decide how a missing value counts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed focus session, reduced to the fields the aggregator reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub actual_duration_minutes: Option<i64>,
    pub self_rating: Option<i64>,
    pub distractions_count: Option<i64>,
}

/// A named experiment bucket owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentRecord {
    pub id: String,
    pub name: String,
}

/// One logged run of an experiment under a free-text condition label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentRunRecord {
    pub id: String,
    pub experiment_id: String,
    pub condition_label: String,
    pub rating: Option<i64>,
}

/// Mean rating and run count for one (experiment, condition) group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionStat {
    pub experiment_name: String,
    pub condition: String,
    pub avg_rating: f64,
    pub run_count: usize,
}
