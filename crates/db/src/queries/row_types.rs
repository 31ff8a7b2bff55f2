// crates/db/src/queries/row_types.rs
// Internal row types. Columns are read by name and converted into the public
// types in `types.rs`.

use chrono::{DateTime, Utc};
use sqlx::Row;

use super::types::{
    EnvironmentPreset, Experiment, ExperimentRun, FocusSession, Profile, StrictnessLevel,
};

/// Unix seconds to UTC; out-of-range values read back as the epoch.
pub(crate) fn from_unix(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

// ============================================================================
// profiles
// ============================================================================

#[derive(Debug)]
pub(crate) struct ProfileRow {
    user_id: String,
    username: Option<String>,
    preferred_block_length: i64,
    strictness_level: String,
    environment_preset: String,
    created_at: i64,
    updated_at: i64,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for ProfileRow {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            user_id: row.try_get("user_id")?,
            username: row.try_get("username")?,
            preferred_block_length: row.try_get("preferred_block_length")?,
            strictness_level: row.try_get("strictness_level")?,
            environment_preset: row.try_get("environment_preset")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl ProfileRow {
    pub(crate) fn into_profile(self) -> Profile {
        Profile {
            user_id: self.user_id,
            username: self.username,
            preferred_block_length: self.preferred_block_length,
            strictness_level: StrictnessLevel::from_db_str(&self.strictness_level),
            environment_preset: EnvironmentPreset::from_db_str(&self.environment_preset),
            created_at: Some(from_unix(self.created_at)),
            updated_at: Some(from_unix(self.updated_at)),
        }
    }
}

// ============================================================================
// sessions
// ============================================================================

#[derive(Debug)]
pub(crate) struct SessionRow {
    id: String,
    user_id: String,
    goal: String,
    planned_duration_minutes: i64,
    actual_duration_minutes: Option<i64>,
    distractions_count: Option<i64>,
    self_rating: Option<i64>,
    environment_used: Option<String>,
    created_at: i64,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for SessionRow {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            goal: row.try_get("goal")?,
            planned_duration_minutes: row.try_get("planned_duration_minutes")?,
            actual_duration_minutes: row.try_get("actual_duration_minutes")?,
            distractions_count: row.try_get("distractions_count")?,
            self_rating: row.try_get("self_rating")?,
            environment_used: row.try_get("environment_used")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl SessionRow {
    pub(crate) fn into_session(self) -> FocusSession {
        FocusSession {
            id: self.id,
            user_id: self.user_id,
            goal: self.goal,
            planned_duration_minutes: self.planned_duration_minutes,
            actual_duration_minutes: self.actual_duration_minutes,
            distractions_count: self.distractions_count,
            self_rating: self.self_rating,
            environment_used: self.environment_used,
            created_at: from_unix(self.created_at),
        }
    }
}

// ============================================================================
// experiments
// ============================================================================

#[derive(Debug)]
pub(crate) struct ExperimentRow {
    id: String,
    user_id: String,
    name: String,
    variable_name: String,
    metric_name: String,
    description: Option<String>,
    created_at: i64,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for ExperimentRow {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            name: row.try_get("name")?,
            variable_name: row.try_get("variable_name")?,
            metric_name: row.try_get("metric_name")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl ExperimentRow {
    pub(crate) fn into_experiment(self) -> Experiment {
        Experiment {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            variable_name: self.variable_name,
            metric_name: self.metric_name,
            description: self.description,
            created_at: from_unix(self.created_at),
        }
    }
}

// ============================================================================
// experiment_runs
// ============================================================================

#[derive(Debug)]
pub(crate) struct RunRow {
    id: String,
    user_id: String,
    experiment_id: String,
    condition_label: String,
    minutes: Option<i64>,
    rating: Option<i64>,
    notes: Option<String>,
    created_at: i64,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for RunRow {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            experiment_id: row.try_get("experiment_id")?,
            condition_label: row.try_get("condition_label")?,
            minutes: row.try_get("minutes")?,
            rating: row.try_get("rating")?,
            notes: row.try_get("notes")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl RunRow {
    pub(crate) fn into_run(self) -> ExperimentRun {
        ExperimentRun {
            id: self.id,
            user_id: self.user_id,
            experiment_id: self.experiment_id,
            condition_label: self.condition_label,
            minutes: self.minutes,
            rating: self.rating,
            notes: self.notes,
            created_at: from_unix(self.created_at),
        }
    }
}
