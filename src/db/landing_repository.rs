// src/db/landing_repository.rs
// DOCUMENTATION: Landing page read queries
// PURPOSE: Categories, gallery and approved reviews; never writes

use crate::config::SchemaName;
use crate::errors::ApiError;
use crate::models::{ApprovedReview, Category, GalleryItem};
use sqlx::PgConnection;

pub struct LandingRepository;

impl LandingRepository {
    pub async fn categories(
        conn: &mut PgConnection,
        schema: &SchemaName,
    ) -> Result<Vec<Category>, ApiError> {
        let sql = format!(
            "SELECT id, title, image_url, description FROM {}.categories ORDER BY id",
            schema
        );

        sqlx::query_as::<_, Category>(&sql)
            .fetch_all(conn)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch categories: {}", e);
                ApiError::Database(format!("Fetch categories failed: {}", e))
            })
    }

    pub async fn gallery(
        conn: &mut PgConnection,
        schema: &SchemaName,
    ) -> Result<Vec<GalleryItem>, ApiError> {
        let sql = format!(
            "SELECT id, image_url, title, description FROM {}.gallery ORDER BY id",
            schema
        );

        sqlx::query_as::<_, GalleryItem>(&sql)
            .fetch_all(conn)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch gallery: {}", e);
                ApiError::Database(format!("Fetch gallery failed: {}", e))
            })
    }

    /// Published reviews only, newest first
    pub async fn approved_reviews(
        conn: &mut PgConnection,
        schema: &SchemaName,
    ) -> Result<Vec<ApprovedReview>, ApiError> {
        let sql = format!(
            r#"
            SELECT id, name, text, rating
            FROM {}.reviews
            WHERE approved = true
            ORDER BY created_at DESC
            "#,
            schema
        );

        sqlx::query_as::<_, ApprovedReview>(&sql)
            .fetch_all(conn)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch approved reviews: {}", e);
                ApiError::Database(format!("Fetch approved reviews failed: {}", e))
            })
    }
}
