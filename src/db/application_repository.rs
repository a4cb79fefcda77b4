// src/db/application_repository.rs
// DOCUMENTATION: Application database operations
// PURPOSE: Insert and list contest applications

use crate::errors::ApiError;
use crate::models::{Application, NewApplication};
use sqlx::PgConnection;

pub struct ApplicationRepository;

impl ApplicationRepository {
    /// Insert one application
    /// DOCUMENTATION: id and created_at are assigned by the database
    pub async fn create(conn: &mut PgConnection, app: &NewApplication) -> Result<i32, ApiError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO applications (full_name, phone, age, contests, photo_url, music_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&app.full_name)
        .bind(&app.phone)
        .bind(app.age)
        .bind(&app.contests)
        .bind(&app.photo_url)
        .bind(&app.music_url)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            log::error!("Failed to create application: {}", e);
            ApiError::Database(format!("Create application failed: {}", e))
        })?;

        Ok(id)
    }

    /// List every application, newest first
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Application>, ApiError> {
        sqlx::query_as::<_, Application>(
            r#"
            SELECT id, full_name, phone, age, contests, photo_url, music_url, created_at
            FROM applications
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(conn)
        .await
        .map_err(|e| {
            log::error!("Failed to list applications: {}", e);
            ApiError::Database(format!("List applications failed: {}", e))
        })
    }
}
