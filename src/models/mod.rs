// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod application;
pub mod landing;
pub mod moderated_review;
pub mod review;
pub mod timestamp;

pub use application::*;
pub use landing::*;
pub use moderated_review::*;
pub use review::*;
