// src/services/store.rs
// DOCUMENTATION: Data access seam used by the handlers
// PURPOSE: One method per data operation; the Postgres adapter checks out
// exactly one pooled connection per call

use crate::config::SchemaName;
use crate::db::{
    ApplicationRepository, LandingRepository, ModeratedReviewRepository, ReviewRepository,
};
use crate::errors::ApiError;
use crate::models::{
    Application, LandingKind, LandingRows, LegacyReview, NewApplication, NewLegacyReview,
    ReviewSubmission,
};
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

#[async_trait]
pub trait ContestStore: Send + Sync {
    async fn create_application(&self, app: &NewApplication) -> Result<i32, ApiError>;

    /// All applications, newest first
    async fn list_applications(&self) -> Result<Vec<Application>, ApiError>;

    async fn create_legacy_review(&self, review: &NewLegacyReview) -> Result<i32, ApiError>;

    async fn recent_legacy_reviews(&self, limit: i64) -> Result<Vec<LegacyReview>, ApiError>;

    /// Insert with `approved = false` inside a transaction
    async fn submit_moderated_review(&self, submission: &ReviewSubmission)
        -> Result<i32, ApiError>;

    async fn landing_data(&self, kind: LandingKind) -> Result<LandingRows, ApiError>;
}

/// Postgres-backed store
pub struct PgStore {
    pool: PgPool,
    landing_schema: SchemaName,
}

impl PgStore {
    pub fn new(pool: PgPool, landing_schema: SchemaName) -> Self {
        Self {
            pool,
            landing_schema,
        }
    }

    /// The connection goes back to the pool when the guard drops,
    /// whether the statement succeeded or not.
    async fn acquire(&self) -> Result<PoolConnection<Postgres>, ApiError> {
        self.pool.acquire().await.map_err(|e| {
            log::error!("Failed to acquire database connection: {}", e);
            ApiError::Database(format!("Acquire connection failed: {}", e))
        })
    }
}

#[async_trait]
impl ContestStore for PgStore {
    async fn create_application(&self, app: &NewApplication) -> Result<i32, ApiError> {
        let mut conn = self.acquire().await?;
        ApplicationRepository::create(&mut conn, app).await
    }

    async fn list_applications(&self) -> Result<Vec<Application>, ApiError> {
        let mut conn = self.acquire().await?;
        ApplicationRepository::list_all(&mut conn).await
    }

    async fn create_legacy_review(&self, review: &NewLegacyReview) -> Result<i32, ApiError> {
        let mut conn = self.acquire().await?;
        ReviewRepository::create(&mut conn, review).await
    }

    async fn recent_legacy_reviews(&self, limit: i64) -> Result<Vec<LegacyReview>, ApiError> {
        let mut conn = self.acquire().await?;
        ReviewRepository::list_recent(&mut conn, limit).await
    }

    async fn submit_moderated_review(
        &self,
        submission: &ReviewSubmission,
    ) -> Result<i32, ApiError> {
        // Dropping an uncommitted transaction rolls it back
        let mut tx = self.pool.begin().await.map_err(|e| {
            log::error!("Failed to begin transaction: {}", e);
            ApiError::Database(format!("Begin transaction failed: {}", e))
        })?;

        let review =
            ModeratedReviewRepository::insert_pending(&mut tx, &self.landing_schema, submission)
                .await?;

        tx.commit().await.map_err(|e| {
            log::error!("Failed to commit review {}: {}", review.id, e);
            ApiError::Database(format!("Commit failed: {}", e))
        })?;

        Ok(review.id)
    }

    async fn landing_data(&self, kind: LandingKind) -> Result<LandingRows, ApiError> {
        let mut conn = self.acquire().await?;
        let schema = &self.landing_schema;

        let rows = match kind {
            LandingKind::Categories => {
                LandingRows::Categories(LandingRepository::categories(&mut conn, schema).await?)
            }
            LandingKind::Gallery => {
                LandingRows::Gallery(LandingRepository::gallery(&mut conn, schema).await?)
            }
            LandingKind::Reviews => LandingRows::Reviews(
                LandingRepository::approved_reviews(&mut conn, schema).await?,
            ),
        };

        Ok(rows)
    }
}
