// src/handlers/submit_review.rs
// DOCUMENTATION: HTTP handler for moderated review submissions
// PURPOSE: Validate, coerce the rating and store the review unapproved

use crate::errors::ApiError;
use crate::handlers::cors::{self, CorsPolicy};
use crate::models::SubmitReviewRequest;
use crate::services::ContestStore;
use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpResponse};
use serde_json::json;

pub const SUBMIT_REVIEW_CORS: CorsPolicy = CorsPolicy {
    allow_methods: "POST, OPTIONS",
    allow_headers: "Content-Type",
};

const SUBMITTED_MESSAGE: &str = "Отзыв успешно отправлен на модерацию";

/// POST /submit-review
/// The client cannot set the approval state.
pub async fn submit_review(
    store: web::Data<dyn ContestStore>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let request: SubmitReviewRequest = cors::parse_body(&body)?;
    let submission = request.into_submission()?;

    let id = store.submit_moderated_review(&submission).await?;

    log::info!("Review {} submitted for moderation", id);
    Ok(cors::json_response(
        StatusCode::CREATED,
        &json!({
            "success": true,
            "message": SUBMITTED_MESSAGE,
            "id": id,
        }),
    ))
}

pub async fn preflight() -> HttpResponse {
    SUBMIT_REVIEW_CORS.preflight()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/submit-review")
            .route(web::post().to(submit_review))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(cors::method_not_allowed)),
    );
}
