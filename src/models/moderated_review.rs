// src/models/moderated_review.rs
// DOCUMENTATION: Reviews that wait for moderation before being published
// PURPOSE: Boundary parsing for POST /submit-review and the public read shape

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use validator::Validate;

/// Rating stored when the client sends none or an unusable one
pub const DEFAULT_RATING: i32 = 5;

/// Raw request body for POST /submit-review
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitReviewRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Kept untyped: floats, strings and out-of-range numbers are coerced, not rejected
    #[serde(default)]
    pub rating: Option<Value>,
}

/// Normalized review ready to insert with `approved = false`
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ReviewSubmission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub text: String,
    pub rating: i32,
}

impl SubmitReviewRequest {
    /// Trim, coerce the rating and reject empty name or text
    pub fn into_submission(self) -> Result<ReviewSubmission, ValidationError> {
        let submission = ReviewSubmission {
            name: self.name.unwrap_or_default().trim().to_string(),
            text: self.text.unwrap_or_default().trim().to_string(),
            rating: coerce_rating(self.rating.as_ref()),
        };

        submission
            .validate()
            .map_err(|_| ValidationError::MissingNameOrText)?;

        Ok(submission)
    }
}

fn coerce_rating(raw: Option<&Value>) -> i32 {
    raw.and_then(Value::as_i64)
        .filter(|r| (1..=5).contains(r))
        .map(|r| r as i32)
        .unwrap_or(DEFAULT_RATING)
}

/// Moderated review row as stored
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ModeratedReview {
    pub id: i32,
    pub name: String,
    pub text: String,
    pub rating: i32,
    pub approved: bool,
}

/// Public view of an approved review served by GET /get-data?type=reviews
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ApprovedReview {
    pub id: i32,
    pub name: String,
    pub text: String,
    pub rating: i32,
}

impl From<&ModeratedReview> for ApprovedReview {
    fn from(review: &ModeratedReview) -> Self {
        ApprovedReview {
            id: review.id,
            name: review.name.clone(),
            text: review.text.clone(),
            rating: review.rating,
        }
    }
}
