// src/models/application.rs

use crate::models::timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Contest entry as stored in `applications`
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i32,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub contests: Option<Vec<String>>,
    pub photo_url: Option<String>,
    pub music_url: Option<String>,
    /// Rendered as ISO-8601 (`2024-05-01T10:15:00.123456`) or null
    #[serde(serialize_with = "timestamp::serialize_opt")]
    pub created_at: Option<NaiveDateTime>,
}

/// Request body for POST /applications
/// DOCUMENTATION: Fields are typed but not checked for presence;
/// a missing field is stored as NULL, except `contests` which defaults to [].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    /// Omitted → empty list, explicit null → NULL
    #[serde(default = "empty_contests")]
    pub contests: Option<Vec<String>>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub music_url: Option<String>,
}

fn empty_contests() -> Option<Vec<String>> {
    Some(Vec::new())
}
