// src/db/moderated_review_repository.rs
// DOCUMENTATION: Moderated review database operations
// PURPOSE: Insert submissions into <landing_schema>.reviews, always unapproved

use crate::config::SchemaName;
use crate::errors::ApiError;
use crate::models::{ModeratedReview, ReviewSubmission};
use sqlx::PgConnection;

pub struct ModeratedReviewRepository;

impl ModeratedReviewRepository {
    /// Insert a submission awaiting moderation
    /// DOCUMENTATION: Callers pass the connection of an open transaction
    pub async fn insert_pending(
        conn: &mut PgConnection,
        schema: &SchemaName,
        submission: &ReviewSubmission,
    ) -> Result<ModeratedReview, ApiError> {
        let sql = format!(
            r#"
            INSERT INTO {}.reviews (name, text, rating, approved)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, text, rating, approved
            "#,
            schema
        );

        sqlx::query_as::<_, ModeratedReview>(&sql)
            .bind(&submission.name)
            .bind(&submission.text)
            .bind(submission.rating)
            .bind(false)
            .fetch_one(conn)
            .await
            .map_err(|e| {
                log::error!("Failed to submit review: {}", e);
                ApiError::Database(format!("Submit review failed: {}", e))
            })
    }
}
