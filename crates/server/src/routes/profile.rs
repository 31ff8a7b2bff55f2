// crates/server/src/routes/profile.rs
//! Profile API routes.
//!
//! - GET /profile — stored profile, or defaults for a user who never saved
//! - PUT /profile — validate and save the editable fields

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, routing::get, Json, Router};
use fokus_db::{
    EnvironmentPreset, Profile, ProfileUpdate, StrictnessLevel, MAX_BLOCK_LENGTH,
    MIN_BLOCK_LENGTH,
};
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult},
    state::AppState,
};

// ============================================================================
// Request Types
// ============================================================================

/// Request body for PUT /api/profile.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub username: Option<String>,
    pub preferred_block_length: i64,
    pub strictness_level: StrictnessLevel,
    pub environment_preset: EnvironmentPreset,
}

impl UpdateProfileRequest {
    fn into_update(self) -> ApiResult<ProfileUpdate> {
        if !(MIN_BLOCK_LENGTH..=MAX_BLOCK_LENGTH).contains(&self.preferred_block_length) {
            return Err(ApiError::BadRequest(format!(
                "preferredBlockLength must be between {MIN_BLOCK_LENGTH} and {MAX_BLOCK_LENGTH}"
            )));
        }
        let username = self
            .username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        Ok(ProfileUpdate {
            username,
            preferred_block_length: self.preferred_block_length,
            strictness_level: self.strictness_level,
            environment_preset: self.environment_preset,
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

// ============================================================================
// Handlers
// ============================================================================

/// Stored profile or the default one for this caller.
pub(crate) async fn load_profile(state: &AppState, user: &AuthUser) -> ApiResult<Profile> {
    Ok(state
        .db
        .get_profile(&user.user_id)
        .await?
        .unwrap_or_else(|| Profile::default_for(&user.user_id, user.email_username())))
}

/// GET /api/profile
async fn get_profile(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> ApiResult<Json<Profile>> {
    Ok(Json(load_profile(&state, &user).await?))
}

/// PUT /api/profile
async fn update_profile(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> ApiResult<Json<Profile>> {
    let Json(request) = payload?;
    let update = request.into_update()?;
    let profile = state.db.upsert_profile(&user.user_id, &update).await?;
    Ok(Json(profile))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bearer, do_request, test_state, StubProvider};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    fn app(state: Arc<AppState>) -> Router {
        Router::new().nest("/api", router()).with_state(state)
    }

    #[tokio::test]
    async fn test_default_profile_uses_email_local_part() {
        let state = test_state(StubProvider::answering("x")).await;
        let auth = bearer(&state, "u1", Some("sam@example.com"));

        let (status, body) = do_request(app(state), Method::GET, "/api/profile", Some(&auth), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "sam");
        assert_eq!(body["preferredBlockLength"], 50);
        assert_eq!(body["strictnessLevel"], "standard");
        assert_eq!(body["environmentPreset"], "red_lofi");
        assert!(body["updatedAt"].is_null());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let state = test_state(StubProvider::answering("x")).await;
        let auth = bearer(&state, "u1", None);

        let (status, saved) = do_request(
            app(state.clone()),
            Method::PUT,
            "/api/profile",
            Some(&auth),
            Some(json!({
                "username": "  deepworker ",
                "preferredBlockLength": 90,
                "strictnessLevel": "brutal",
                "environmentPreset": "warm_nature"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["username"], "deepworker");

        let (_, loaded) = do_request(app(state), Method::GET, "/api/profile", Some(&auth), None).await;
        assert_eq!(loaded["preferredBlockLength"], 90);
        assert_eq!(loaded["strictnessLevel"], "brutal");
        assert!(loaded["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_put_rejects_out_of_range_block() {
        let state = test_state(StubProvider::answering("x")).await;
        let auth = bearer(&state, "u1", None);

        let (status, body) = do_request(
            app(state),
            Method::PUT,
            "/api/profile",
            Some(&auth),
            Some(json!({
                "preferredBlockLength": 10,
                "strictnessLevel": "chill",
                "environmentPreset": "red_lofi"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["details"].as_str().unwrap().contains("preferredBlockLength"));
    }

    #[tokio::test]
    async fn test_put_rejects_unknown_preset() {
        let state = test_state(StubProvider::answering("x")).await;
        let auth = bearer(&state, "u1", None);

        let (status, _) = do_request(
            app(state),
            Method::PUT,
            "/api/profile",
            Some(&auth),
            Some(json!({
                "preferredBlockLength": 50,
                "strictnessLevel": "chill",
                "environmentPreset": "disco"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
