/// Inline SQL migrations for the FOKUS database schema.
///
/// Timestamps are unix seconds. Every row is owned by a `user_id`; there is
/// no users table because identities come from the bearer token.

pub const MIGRATIONS: &[&str] = &[
    // Migration 1: profiles
    r#"
CREATE TABLE IF NOT EXISTS profiles (
    user_id TEXT PRIMARY KEY,
    username TEXT,
    preferred_block_length INTEGER NOT NULL DEFAULT 50
        CHECK (preferred_block_length BETWEEN 20 AND 120),
    strictness_level TEXT NOT NULL DEFAULT 'standard'
        CHECK (strictness_level IN ('chill', 'standard', 'brutal')),
    environment_preset TEXT NOT NULL DEFAULT 'red_lofi'
        CHECK (environment_preset IN ('red_lofi', 'blue_silence', 'warm_nature')),
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);
"#,
    // Migration 2: focus sessions
    r#"
CREATE TABLE IF NOT EXISTS sessions (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    goal TEXT NOT NULL,
    planned_duration_minutes INTEGER NOT NULL
        CHECK (planned_duration_minutes BETWEEN 15 AND 120),
    actual_duration_minutes INTEGER CHECK (actual_duration_minutes >= 0),
    distractions_count INTEGER CHECK (distractions_count >= 0),
    self_rating INTEGER CHECK (self_rating BETWEEN 1 AND 10),
    environment_used TEXT,
    created_at INTEGER NOT NULL
);
"#,
    r#"
CREATE INDEX IF NOT EXISTS idx_sessions_user_created ON sessions(user_id, created_at DESC);
"#,
    // Migration 4: experiments
    r#"
CREATE TABLE IF NOT EXISTS experiments (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    name TEXT NOT NULL,
    variable_name TEXT NOT NULL DEFAULT 'lighting_color',
    metric_name TEXT NOT NULL DEFAULT 'self_focus_rating_1_10',
    description TEXT,
    created_at INTEGER NOT NULL
);
"#,
    r#"
CREATE INDEX IF NOT EXISTS idx_experiments_user_created ON experiments(user_id, created_at DESC);
"#,
    // Migration 6: experiment runs
    r#"
CREATE TABLE IF NOT EXISTS experiment_runs (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    experiment_id TEXT NOT NULL REFERENCES experiments(id) ON DELETE CASCADE,
    condition_label TEXT NOT NULL,
    minutes INTEGER CHECK (minutes >= 0),
    rating INTEGER CHECK (rating BETWEEN 1 AND 10),
    notes TEXT,
    created_at INTEGER NOT NULL
);
"#,
    r#"
CREATE INDEX IF NOT EXISTS idx_runs_user_created ON experiment_runs(user_id, created_at DESC);
"#,
    r#"
CREATE INDEX IF NOT EXISTS idx_runs_experiment ON experiment_runs(experiment_id);
"#,
];
