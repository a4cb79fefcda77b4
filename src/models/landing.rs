// src/models/landing.rs
// DOCUMENTATION: Read-only landing page content
// PURPOSE: Row shapes and the `type` discriminator of GET /get-data

use crate::models::ApprovedReview;
use serde::Serialize;
use sqlx::FromRow;

/// Contest category card. Keys serialize as column names.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct GalleryItem {
    pub id: i32,
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Dataset selected by the `type` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingKind {
    Categories,
    Gallery,
    Reviews,
}

impl LandingKind {
    /// `None` for unrecognized values, which are answered with an empty list
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "categories" => Some(LandingKind::Categories),
            "gallery" => Some(LandingKind::Gallery),
            "reviews" => Some(LandingKind::Reviews),
            _ => None,
        }
    }
}

/// Rows of one landing dataset; serializes as a plain JSON array
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LandingRows {
    Categories(Vec<Category>),
    Gallery(Vec<GalleryItem>),
    Reviews(Vec<ApprovedReview>),
}

impl LandingRows {
    pub fn row_count(&self) -> usize {
        match self {
            LandingRows::Categories(rows) => rows.len(),
            LandingRows::Gallery(rows) => rows.len(),
            LandingRows::Reviews(rows) => rows.len(),
        }
    }
}
