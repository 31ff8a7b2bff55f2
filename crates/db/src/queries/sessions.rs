// crates/db/src/queries/sessions.rs
// Focus session inserts and per-user listings.

use fokus_core::SessionRecord;

use super::row_types::SessionRow;
use super::types::{FocusSession, NewSession};
use crate::{Database, DbResult};

const SESSION_COLUMNS: &str = "id, user_id, goal, planned_duration_minutes, actual_duration_minutes, \
     distractions_count, self_rating, environment_used, created_at";

impl Database {
    /// Store a completed focus session for a user.
    pub async fn insert_session(&self, user_id: &str, session: &NewSession) -> DbResult<FocusSession> {
        let id = uuid::Uuid::new_v4().to_string();
        let row: SessionRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO sessions (
                id, user_id, goal, planned_duration_minutes, actual_duration_minutes,
                distractions_count, self_rating, environment_used, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            RETURNING {SESSION_COLUMNS}
            "#
        ))
        .bind(&id)
        .bind(user_id)
        .bind(&session.goal)
        .bind(session.planned_duration_minutes)
        .bind(session.actual_duration_minutes)
        .bind(session.distractions_count)
        .bind(session.self_rating)
        .bind(&session.environment_used)
        .bind(session.created_at.timestamp())
        .fetch_one(self.pool())
        .await?;

        tracing::info!(
            user_id = %user_id,
            session_id = %id,
            minutes = ?session.actual_duration_minutes,
            "focus session stored"
        );
        Ok(row.into_session())
    }

    /// All of a user's sessions, newest first.
    pub async fn list_sessions(&self, user_id: &str) -> DbResult<Vec<FocusSession>> {
        let rows: Vec<SessionRow> = sqlx::query_as(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions WHERE user_id = ?1 \
             ORDER BY created_at DESC, rowid DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.into_iter().map(SessionRow::into_session).collect())
    }

    /// The `limit` most recent sessions of a user.
    pub async fn recent_sessions(&self, user_id: &str, limit: i64) -> DbResult<Vec<FocusSession>> {
        let rows: Vec<SessionRow> = sqlx::query_as(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions WHERE user_id = ?1 \
             ORDER BY created_at DESC, rowid DESC LIMIT ?2"
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.into_iter().map(SessionRow::into_session).collect())
    }

    /// A user's sessions reduced to the fields the statistics core reads.
    pub async fn session_records(&self, user_id: &str) -> DbResult<Vec<SessionRecord>> {
        Ok(self
            .list_sessions(user_id)
            .await?
            .iter()
            .map(FocusSession::to_record)
            .collect())
    }
}
