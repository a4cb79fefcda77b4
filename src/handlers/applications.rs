// src/handlers/applications.rs
// DOCUMENTATION: HTTP handlers for contest applications
// PURPOSE: Public submission, admin-only listing

use crate::config::Config;
use crate::errors::ApiError;
use crate::handlers::cors::{self, CorsPolicy};
use crate::models::NewApplication;
use crate::services::ContestStore;
use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

pub const APPLICATIONS_CORS: CorsPolicy = CorsPolicy {
    allow_methods: "GET, POST, OPTIONS",
    allow_headers: "Content-Type, X-Admin-Token",
};

/// POST /applications
/// Store a contest entry. Fields are not checked for presence.
pub async fn create_application(
    store: web::Data<dyn ContestStore>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let app: NewApplication = cors::parse_body(&body)?;
    let id = store.create_application(&app).await?;

    log::info!("Application {} created", id);
    Ok(cors::json_response(
        StatusCode::CREATED,
        &json!({ "id": id, "message": "Application created" }),
    ))
}

/// GET /applications
/// Requires the X-Admin-Token header
pub async fn list_applications(
    store: web::Data<dyn ContestStore>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    verify_admin_token(&req, &config)?;

    let applications = store.list_applications().await?;
    Ok(cors::json_response(StatusCode::OK, &applications))
}

/// OPTIONS /applications
pub async fn preflight() -> HttpResponse {
    APPLICATIONS_CORS.preflight()
}

/// Checks X-Admin-Token against the configured admin token
/// Header names are case-insensitive, the value is compared exactly.
fn verify_admin_token(req: &HttpRequest, config: &Config) -> Result<(), ApiError> {
    let token = req
        .headers()
        .get("X-Admin-Token")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            log::warn!("Applications list requested without token");
            ApiError::Unauthorized
        })?;

    if !config.admin_token.matches(token) {
        log::warn!("Applications list requested with invalid token");
        return Err(ApiError::Unauthorized);
    }

    Ok(())
}

/// Configuration for application routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/applications")
            .route(web::post().to(create_application))
            .route(web::get().to(list_applications))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(cors::method_not_allowed)),
    );
}
