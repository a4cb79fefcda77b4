// src/handlers/get_data.rs
// DOCUMENTATION: Read-only landing page data
// PURPOSE: Dispatch on the `type` query parameter to one of three fixed queries

use crate::errors::ApiError;
use crate::handlers::cors::{self, CorsPolicy};
use crate::models::LandingKind;
use crate::services::ContestStore;
use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

pub const GET_DATA_CORS: CorsPolicy = CorsPolicy {
    allow_methods: "GET, OPTIONS",
    allow_headers: "Content-Type",
};

#[derive(Debug, Deserialize)]
pub struct GetDataQuery {
    #[serde(rename = "type")]
    pub data_type: Option<String>,
}

/// GET /get-data?type=categories|gallery|reviews
/// Unknown types answer 200 with an empty list.
pub async fn get_data(
    store: web::Data<dyn ContestStore>,
    query: web::Query<GetDataQuery>,
) -> Result<HttpResponse, ApiError> {
    let data_type = query.data_type.as_deref().unwrap_or("categories");

    let Some(kind) = LandingKind::parse(data_type) else {
        log::debug!("Unknown data type requested: {}", data_type);
        return Ok(cors::json_response(StatusCode::OK, &Vec::<()>::new()));
    };

    let rows = store.landing_data(kind).await?;
    log::debug!("Serving {} {} rows", rows.row_count(), data_type);

    Ok(cors::json_response(StatusCode::OK, &rows))
}

pub async fn preflight() -> HttpResponse {
    GET_DATA_CORS.preflight()
}

/// Query string failures answer with the JSON error shape and CORS origin
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected query string: {}", err);
        ApiError::InvalidQuery(err.to_string()).into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/get-data")
            .app_data(query_config())
            .route(web::get().to(get_data))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(cors::method_not_allowed)),
    );
}
