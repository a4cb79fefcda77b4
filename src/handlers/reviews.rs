// src/handlers/reviews.rs
// DOCUMENTATION: HTTP handlers for legacy reviews
// PURPOSE: Unmoderated create and list; no auth on either

use crate::errors::ApiError;
use crate::handlers::cors::{self, CorsPolicy};
use crate::models::NewLegacyReview;
use crate::services::ContestStore;
use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpResponse};
use serde_json::json;

pub const REVIEWS_CORS: CorsPolicy = CorsPolicy {
    allow_methods: "GET, POST, OPTIONS",
    allow_headers: "Content-Type",
};

/// Size of the GET /reviews listing
pub const RECENT_REVIEWS_LIMIT: i64 = 20;

/// POST /reviews
pub async fn create_review(
    store: web::Data<dyn ContestStore>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let review: NewLegacyReview = cors::parse_body(&body)?;
    let id = store.create_legacy_review(&review).await?;

    log::info!("Review {} created", id);
    Ok(cors::json_response(
        StatusCode::CREATED,
        &json!({ "id": id, "message": "Review created" }),
    ))
}

/// GET /reviews
/// The 20 most recent reviews
pub async fn list_reviews(store: web::Data<dyn ContestStore>) -> Result<HttpResponse, ApiError> {
    let reviews = store.recent_legacy_reviews(RECENT_REVIEWS_LIMIT).await?;
    Ok(cors::json_response(StatusCode::OK, &reviews))
}

pub async fn preflight() -> HttpResponse {
    REVIEWS_CORS.preflight()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/reviews")
            .route(web::post().to(create_review))
            .route(web::get().to(list_reviews))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(cors::method_not_allowed)),
    );
}
