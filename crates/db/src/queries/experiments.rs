// crates/db/src/queries/experiments.rs
// Experiments and their logged runs.

use chrono::Utc;
use fokus_core::{ExperimentRecord, ExperimentRunRecord};

use super::row_types::{ExperimentRow, RunRow};
use super::types::{Experiment, ExperimentRun, NewExperiment, NewRun};
use crate::{Database, DbResult};

const EXPERIMENT_COLUMNS: &str =
    "id, user_id, name, variable_name, metric_name, description, created_at";

const RUN_COLUMNS: &str =
    "id, user_id, experiment_id, condition_label, minutes, rating, notes, created_at";

impl Database {
    // ========================================================================
    // Experiments
    // ========================================================================

    pub async fn create_experiment(
        &self,
        user_id: &str,
        experiment: &NewExperiment,
    ) -> DbResult<Experiment> {
        let id = uuid::Uuid::new_v4().to_string();
        let row: ExperimentRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO experiments (
                id, user_id, name, variable_name, metric_name, description, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING {EXPERIMENT_COLUMNS}
            "#
        ))
        .bind(&id)
        .bind(user_id)
        .bind(&experiment.name)
        .bind(&experiment.variable_name)
        .bind(&experiment.metric_name)
        .bind(&experiment.description)
        .bind(Utc::now().timestamp())
        .fetch_one(self.pool())
        .await?;

        tracing::info!(user_id = %user_id, experiment_id = %id, "experiment created");
        Ok(row.into_experiment())
    }

    /// All of a user's experiments, newest first.
    pub async fn list_experiments(&self, user_id: &str) -> DbResult<Vec<Experiment>> {
        let rows: Vec<ExperimentRow> = sqlx::query_as(&format!(
            "SELECT {EXPERIMENT_COLUMNS} FROM experiments WHERE user_id = ?1 \
             ORDER BY created_at DESC, rowid DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.into_iter().map(ExperimentRow::into_experiment).collect())
    }

    /// A single experiment, only if it belongs to `user_id`.
    pub async fn get_experiment(
        &self,
        user_id: &str,
        experiment_id: &str,
    ) -> DbResult<Option<Experiment>> {
        let row: Option<ExperimentRow> = sqlx::query_as(&format!(
            "SELECT {EXPERIMENT_COLUMNS} FROM experiments WHERE user_id = ?1 AND id = ?2"
        ))
        .bind(user_id)
        .bind(experiment_id)
        .fetch_optional(self.pool())
        .await?;
        Ok(row.map(ExperimentRow::into_experiment))
    }

    pub async fn experiment_records(&self, user_id: &str) -> DbResult<Vec<ExperimentRecord>> {
        Ok(self
            .list_experiments(user_id)
            .await?
            .iter()
            .map(Experiment::to_record)
            .collect())
    }

    // ========================================================================
    // Runs
    // ========================================================================

    /// Log a run against one of the user's experiments.
    ///
    /// Returns `Ok(None)` when the experiment does not exist or belongs to
    /// another user.
    pub async fn log_run(
        &self,
        user_id: &str,
        experiment_id: &str,
        run: &NewRun,
    ) -> DbResult<Option<ExperimentRun>> {
        let mut tx = self.pool().begin().await?;

        let owned: Option<(String,)> =
            sqlx::query_as("SELECT id FROM experiments WHERE user_id = ?1 AND id = ?2")
                .bind(user_id)
                .bind(experiment_id)
                .fetch_optional(&mut *tx)
                .await?;
        if owned.is_none() {
            tracing::debug!(user_id = %user_id, experiment_id = %experiment_id, "run for unknown experiment");
            return Ok(None);
        }

        let id = uuid::Uuid::new_v4().to_string();
        let row: RunRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO experiment_runs (
                id, user_id, experiment_id, condition_label, minutes, rating, notes, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING {RUN_COLUMNS}
            "#
        ))
        .bind(&id)
        .bind(user_id)
        .bind(experiment_id)
        .bind(&run.condition_label)
        .bind(run.minutes)
        .bind(run.rating)
        .bind(&run.notes)
        .bind(Utc::now().timestamp())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            user_id = %user_id,
            experiment_id = %experiment_id,
            run_id = %id,
            "experiment run logged"
        );
        Ok(Some(row.into_run()))
    }

    /// All of a user's runs across experiments, newest first.
    pub async fn list_runs(&self, user_id: &str) -> DbResult<Vec<ExperimentRun>> {
        let rows: Vec<RunRow> = sqlx::query_as(&format!(
            "SELECT {RUN_COLUMNS} FROM experiment_runs WHERE user_id = ?1 \
             ORDER BY created_at DESC, rowid DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.into_iter().map(RunRow::into_run).collect())
    }

    pub async fn run_records(&self, user_id: &str) -> DbResult<Vec<ExperimentRunRecord>> {
        Ok(self
            .list_runs(user_id)
            .await?
            .iter()
            .map(ExperimentRun::to_record)
            .collect())
    }
}
