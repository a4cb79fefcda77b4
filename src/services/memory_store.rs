// src/services/memory_store.rs
// DOCUMENTATION: In-memory ContestStore used by the tests
// PURPOSE: Mirrors the SQL ordering and filtering, and counts how many
// connections a request would have checked out

use crate::errors::ApiError;
use crate::models::{
    Application, ApprovedReview, Category, GalleryItem, LandingKind, LandingRows, LegacyReview,
    ModeratedReview, NewApplication, NewLegacyReview, ReviewSubmission,
};
use crate::services::ContestStore;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
struct Tables {
    applications: Vec<Application>,
    legacy_reviews: Vec<LegacyReview>,
    moderated_reviews: Vec<(ModeratedReview, NaiveDateTime)>,
    categories: Vec<Category>,
    gallery: Vec<GalleryItem>,
    ticks: i64,
}

impl Tables {
    /// Strictly increasing fake clock
    fn now(&mut self) -> NaiveDateTime {
        self.ticks += 1;
        let epoch = NaiveDate::from_ymd_opt(2025, 3, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap_or_default();
        epoch + Duration::seconds(self.ticks)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    connections: AtomicUsize,
    fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the database were unreachable
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_landing(categories: Vec<Category>, gallery: Vec<GalleryItem>) -> Self {
        let store = Self::default();
        {
            let mut tables = store.tables.lock().unwrap();
            tables.categories = categories;
            tables.gallery = gallery;
        }
        store
    }

    /// Number of connections checked out so far
    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    pub fn moderated_reviews(&self) -> Vec<ModeratedReview> {
        let tables = self.tables.lock().unwrap();
        tables.moderated_reviews.iter().map(|(r, _)| r.clone()).collect()
    }

    /// Stand-in for the external moderation step
    pub fn approve(&self, id: i32) {
        let mut tables = self.tables.lock().unwrap();
        for (review, _) in tables.moderated_reviews.iter_mut() {
            if review.id == id {
                review.approved = true;
            }
        }
    }

    fn connect(&self) -> Result<std::sync::MutexGuard<'_, Tables>, ApiError> {
        self.connections.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ApiError::Database("connection refused".to_string()));
        }
        Ok(self.tables.lock().unwrap())
    }
}

#[async_trait]
impl ContestStore for MemoryStore {
    async fn create_application(&self, app: &NewApplication) -> Result<i32, ApiError> {
        let mut tables = self.connect()?;
        let id = tables.applications.len() as i32 + 1;
        let created_at = tables.now();
        tables.applications.push(Application {
            id,
            full_name: app.full_name.clone(),
            phone: app.phone.clone(),
            age: app.age,
            contests: app.contests.clone(),
            photo_url: app.photo_url.clone(),
            music_url: app.music_url.clone(),
            created_at: Some(created_at),
        });
        Ok(id)
    }

    async fn list_applications(&self) -> Result<Vec<Application>, ApiError> {
        let tables = self.connect()?;
        let mut rows = tables.applications.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn create_legacy_review(&self, review: &NewLegacyReview) -> Result<i32, ApiError> {
        let mut tables = self.connect()?;
        let id = tables.legacy_reviews.len() as i32 + 1;
        let created_at = tables.now();
        tables.legacy_reviews.push(LegacyReview {
            id,
            name: review.name.clone(),
            rating: review.rating,
            review_text: review.review_text.clone(),
            created_at: Some(created_at),
        });
        Ok(id)
    }

    async fn recent_legacy_reviews(&self, limit: i64) -> Result<Vec<LegacyReview>, ApiError> {
        let tables = self.connect()?;
        let mut rows = tables.legacy_reviews.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }

    async fn submit_moderated_review(
        &self,
        submission: &ReviewSubmission,
    ) -> Result<i32, ApiError> {
        let mut tables = self.connect()?;
        let id = tables.moderated_reviews.len() as i32 + 1;
        let created_at = tables.now();
        tables.moderated_reviews.push((
            ModeratedReview {
                id,
                name: submission.name.clone(),
                text: submission.text.clone(),
                rating: submission.rating,
                approved: false,
            },
            created_at,
        ));
        Ok(id)
    }

    async fn landing_data(&self, kind: LandingKind) -> Result<LandingRows, ApiError> {
        let tables = self.connect()?;
        let rows = match kind {
            LandingKind::Categories => LandingRows::Categories(tables.categories.clone()),
            LandingKind::Gallery => LandingRows::Gallery(tables.gallery.clone()),
            LandingKind::Reviews => {
                let mut approved: Vec<_> = tables
                    .moderated_reviews
                    .iter()
                    .filter(|(review, _)| review.approved)
                    .collect();
                approved.sort_by(|a, b| b.1.cmp(&a.1));
                LandingRows::Reviews(
                    approved
                        .into_iter()
                        .map(|(review, _)| ApprovedReview::from(review))
                        .collect(),
                )
            }
        };
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_each_call_counts_one_connection() {
        let store = MemoryStore::new();
        store
            .create_application(&NewApplication::default())
            .await
            .unwrap();
        store.list_applications().await.unwrap();
        assert_eq!(store.connections(), 2);
    }

    #[tokio::test]
    async fn test_recent_reviews_are_newest_first_and_limited() {
        let store = MemoryStore::new();
        for i in 0..25 {
            store
                .create_legacy_review(&NewLegacyReview {
                    name: Some(format!("reviewer {}", i)),
                    rating: Some(5),
                    review_text: None,
                })
                .await
                .unwrap();
        }

        let rows = store.recent_legacy_reviews(20).await.unwrap();
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0].id, 25);
        assert_eq!(rows[19].id, 6);
    }

    #[tokio::test]
    async fn test_failing_store_still_counts_attempt() {
        let store = MemoryStore::failing();
        assert!(store.list_applications().await.is_err());
        assert_eq!(store.connections(), 1);
    }
}
