// src/handlers/cors.rs
// DOCUMENTATION: Response helpers shared by the four handlers
// PURPOSE: Static CORS preflight answers, JSON responses and body parsing

use crate::errors::ApiError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Preflight answer of one handler
pub struct CorsPolicy {
    pub allow_methods: &'static str,
    pub allow_headers: &'static str,
}

impl CorsPolicy {
    /// 200 with an empty body; no business logic runs
    pub fn preflight(&self) -> HttpResponse {
        HttpResponse::Ok()
            .insert_header(("Access-Control-Allow-Origin", "*"))
            .insert_header(("Access-Control-Allow-Methods", self.allow_methods))
            .insert_header(("Access-Control-Allow-Headers", self.allow_headers))
            .insert_header(("Access-Control-Max-Age", "86400"))
            .finish()
    }
}

/// JSON response carrying the CORS origin header
/// DOCUMENTATION: serde_json writes non-ASCII characters literally
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .json(body)
}

/// Fallback for verbs a resource does not accept
pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}

/// Parse a JSON request body into a typed input
/// An absent body is read as `{}`.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let raw: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };

    serde_json::from_slice(raw).map_err(|e| {
        log::warn!("Rejected request body: {}", e);
        ApiError::InvalidBody(e.to_string())
    })
}
