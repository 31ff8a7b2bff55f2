// crates/db/src/queries/profiles.rs
// Profile read and upsert.

use chrono::Utc;

use super::row_types::ProfileRow;
use super::types::{Profile, ProfileUpdate};
use crate::{Database, DbResult};

const PROFILE_COLUMNS: &str = "user_id, username, preferred_block_length, strictness_level, \
     environment_preset, created_at, updated_at";

impl Database {
    /// Stored profile for a user, or `None` if they never saved one.
    pub async fn get_profile(&self, user_id: &str) -> DbResult<Option<Profile>> {
        let row: Option<ProfileRow> = sqlx::query_as(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = ?1"
        ))
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?;
        Ok(row.map(ProfileRow::into_profile))
    }

    /// Insert or replace the editable fields of a user's profile.
    /// `created_at` is kept from the first save.
    pub async fn upsert_profile(&self, user_id: &str, update: &ProfileUpdate) -> DbResult<Profile> {
        let now = Utc::now().timestamp();
        let row: ProfileRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO profiles (
                user_id, username, preferred_block_length, strictness_level,
                environment_preset, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
            ON CONFLICT(user_id) DO UPDATE SET
                username = excluded.username,
                preferred_block_length = excluded.preferred_block_length,
                strictness_level = excluded.strictness_level,
                environment_preset = excluded.environment_preset,
                updated_at = excluded.updated_at
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(&update.username)
        .bind(update.preferred_block_length)
        .bind(update.strictness_level.as_str())
        .bind(update.environment_preset.as_str())
        .bind(now)
        .fetch_one(self.pool())
        .await?;

        tracing::info!(user_id = %user_id, "profile saved");
        Ok(row.into_profile())
    }
}
