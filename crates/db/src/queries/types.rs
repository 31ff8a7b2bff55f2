// crates/db/src/queries/types.rs
// Public row types returned by the query layer, plus insert/update inputs.

use chrono::{DateTime, Utc};
use fokus_core::{ExperimentRecord, ExperimentRunRecord, SessionRecord};
use serde::{Deserialize, Serialize};

/// Default focus block length in minutes.
pub const DEFAULT_BLOCK_LENGTH: i64 = 50;
pub const MIN_BLOCK_LENGTH: i64 = 20;
pub const MAX_BLOCK_LENGTH: i64 = 120;

pub const DEFAULT_VARIABLE_NAME: &str = "lighting_color";
pub const DEFAULT_METRIC_NAME: &str = "self_focus_rating_1_10";

// ============================================================================
// Profile enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrictnessLevel {
    Chill,
    #[default]
    Standard,
    Brutal,
}

impl StrictnessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chill => "chill",
            Self::Standard => "standard",
            Self::Brutal => "brutal",
        }
    }

    /// Unknown values read back as the default.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "chill" => Self::Chill,
            "brutal" => Self::Brutal,
            _ => Self::Standard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentPreset {
    #[default]
    RedLofi,
    BlueSilence,
    WarmNature,
}

impl EnvironmentPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RedLofi => "red_lofi",
            Self::BlueSilence => "blue_silence",
            Self::WarmNature => "warm_nature",
        }
    }

    pub fn from_db_str(s: &str) -> Self {
        match s {
            "blue_silence" => Self::BlueSilence,
            "warm_nature" => Self::WarmNature,
            _ => Self::RedLofi,
        }
    }
}

// ============================================================================
// Profiles
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub username: Option<String>,
    pub preferred_block_length: i64,
    pub strictness_level: StrictnessLevel,
    pub environment_preset: EnvironmentPreset,
    /// `None` until the profile has been saved once.
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// The profile a user sees before saving one.
    pub fn default_for(user_id: &str, username: Option<String>) -> Self {
        Self {
            user_id: user_id.to_string(),
            username,
            preferred_block_length: DEFAULT_BLOCK_LENGTH,
            strictness_level: StrictnessLevel::default(),
            environment_preset: EnvironmentPreset::default(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// Full replacement of the editable profile fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub preferred_block_length: i64,
    pub strictness_level: StrictnessLevel,
    pub environment_preset: EnvironmentPreset,
}

// ============================================================================
// Focus sessions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSession {
    pub id: String,
    pub user_id: String,
    pub goal: String,
    pub planned_duration_minutes: i64,
    pub actual_duration_minutes: Option<i64>,
    pub distractions_count: Option<i64>,
    pub self_rating: Option<i64>,
    pub environment_used: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FocusSession {
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            id: self.id.clone(),
            created_at: self.created_at,
            actual_duration_minutes: self.actual_duration_minutes,
            self_rating: self.self_rating,
            distractions_count: self.distractions_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    pub goal: String,
    pub planned_duration_minutes: i64,
    pub actual_duration_minutes: Option<i64>,
    pub distractions_count: Option<i64>,
    pub self_rating: Option<i64>,
    pub environment_used: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Experiments
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub variable_name: String,
    pub metric_name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Experiment {
    pub fn to_record(&self) -> ExperimentRecord {
        ExperimentRecord {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExperiment {
    pub name: String,
    pub variable_name: String,
    pub metric_name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentRun {
    pub id: String,
    pub user_id: String,
    pub experiment_id: String,
    pub condition_label: String,
    pub minutes: Option<i64>,
    pub rating: Option<i64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ExperimentRun {
    pub fn to_record(&self) -> ExperimentRunRecord {
        ExperimentRunRecord {
            id: self.id.clone(),
            experiment_id: self.experiment_id.clone(),
            condition_label: self.condition_label.clone(),
            rating: self.rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRun {
    pub condition_label: String,
    pub minutes: Option<i64>,
    pub rating: Option<i64>,
    pub notes: Option<String>,
}
