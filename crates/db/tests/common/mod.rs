//! Shared fixtures for fokus-db integration tests.

use chrono::{DateTime, TimeZone, Utc};
use fokus_db::{NewExperiment, NewRun, NewSession, DEFAULT_METRIC_NAME, DEFAULT_VARIABLE_NAME};

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
}

pub fn make_session(goal: &str, created_at: DateTime<Utc>, minutes: i64, rating: i64, distractions: i64) -> NewSession {
    NewSession {
        goal: goal.to_string(),
        planned_duration_minutes: 50,
        actual_duration_minutes: Some(minutes),
        distractions_count: Some(distractions),
        self_rating: Some(rating),
        environment_used: None,
        created_at,
    }
}

pub fn make_experiment(name: &str) -> NewExperiment {
    NewExperiment {
        name: name.to_string(),
        variable_name: DEFAULT_VARIABLE_NAME.to_string(),
        metric_name: DEFAULT_METRIC_NAME.to_string(),
        description: Some("Does lamp color change focus?".to_string()),
    }
}

pub fn make_run(label: &str, rating: Option<i64>) -> NewRun {
    NewRun {
        condition_label: label.to_string(),
        minutes: Some(45),
        rating,
        notes: None,
    }
}
