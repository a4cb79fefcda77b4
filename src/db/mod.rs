// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod application_repository;
pub mod landing_repository;
pub mod moderated_review_repository;
pub mod review_repository;

pub use application_repository::*;
pub use landing_repository::*;
pub use moderated_review_repository::*;
pub use review_repository::*;
