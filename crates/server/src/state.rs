// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use fokus_core::llm::LlmProvider;
use fokus_db::Database;

use crate::auth::AuthKeys;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Database handle for profile, session and experiment queries.
    pub db: Database,
    /// Inference backend for the coach.
    pub llm: Arc<dyn LlmProvider>,
    /// JWT keys used by the `AuthUser` extractor.
    pub auth: AuthKeys,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(db: Database, llm: Arc<dyn LlmProvider>, auth: AuthKeys) -> Arc<Self> {
        Arc::new(Self {
            start_time: Instant::now(),
            db,
            llm,
            auth,
        })
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubProvider;

    #[tokio::test]
    async fn test_app_state_new() {
        let db = Database::new_in_memory().await.expect("in-memory DB");
        let state = AppState::new(db, StubProvider::answering("ok"), AuthKeys::new("s", None));
        assert!(state.uptime_secs() < 1);
        assert_eq!(state.llm.name(), "stub");
    }
}
