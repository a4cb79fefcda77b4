// src/db/review_repository.rs
// DOCUMENTATION: Legacy review database operations
// PURPOSE: Insert and list rows of the unmoderated `reviews` table

use crate::errors::ApiError;
use crate::models::{LegacyReview, NewLegacyReview};
use sqlx::PgConnection;

pub struct ReviewRepository;

impl ReviewRepository {
    /// Create a new review
    /// DOCUMENTATION: Stored as sent, rating is not range checked
    pub async fn create(conn: &mut PgConnection, review: &NewLegacyReview) -> Result<i32, ApiError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO reviews (name, rating, review_text)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&review.name)
        .bind(review.rating)
        .bind(&review.review_text)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            log::error!("Failed to create review: {}", e);
            ApiError::Database(format!("Create review failed: {}", e))
        })?;

        Ok(id)
    }

    /// Most recent reviews, newest first
    pub async fn list_recent(
        conn: &mut PgConnection,
        limit: i64,
    ) -> Result<Vec<LegacyReview>, ApiError> {
        sqlx::query_as::<_, LegacyReview>(
            r#"
            SELECT id, name, rating, review_text, created_at
            FROM reviews
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(conn)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch reviews: {}", e);
            ApiError::Database(format!("Fetch reviews failed: {}", e))
        })
    }
}
