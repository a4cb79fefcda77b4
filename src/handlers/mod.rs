// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod applications;
pub mod cors;
pub mod get_data;
pub mod health;
pub mod reviews;
pub mod submit_review;

pub use applications::config as applications_config;
pub use get_data::config as get_data_config;
pub use health::config as health_config;
pub use reviews::config as reviews_config;
pub use submit_review::config as submit_review_config;

use actix_web::web;

/// Every route served by the application
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health_config)
        .configure(applications_config)
        .configure(reviews_config)
        .configure(submit_review_config)
        .configure(get_data_config);
}
