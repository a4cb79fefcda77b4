// src/models/review.rs

use crate::models::timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Review in the legacy `reviews` table (no moderation flag)
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LegacyReview {
    pub id: i32,
    pub name: Option<String>,
    pub rating: Option<i32>,
    pub review_text: Option<String>,
    #[serde(serialize_with = "timestamp::serialize_opt")]
    pub created_at: Option<NaiveDateTime>,
}

/// Request body for POST /reviews
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLegacyReview {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub review_text: Option<String>,
}
