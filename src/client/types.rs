//! Public data types for the Tynt API.
//!
//! All records are passive values, fully populated from one JSON response
//! and never mutated afterwards. Required wire fields have no serde
//! defaults, so a payload missing one fails deserialization instead of
//! producing a partially-filled record.

use serde::{Deserialize, Serialize};

/// A Tynt top category.
///
/// `url` is absolute and serves as the base for the category's
/// sub-resources (`/pages`, `/images`, `/terms`). Categories built locally
/// from a bare name via [`TyntClient::category`](super::TyntClient::category)
/// carry no display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub display_name: Option<String>,
    pub name: String,
    pub url: String,
}

/// A web page analyzed by Tynt, with its engagement counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "image")]
    pub image_url: Option<String>,
    pub content: String,
    pub copies: u64,
    pub page_views: u64,
    pub tynt_score: i64,
}

/// An image from an analyzed page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// URL of the page the image appears on.
    #[serde(rename = "url")]
    pub page_url: String,
    #[serde(rename = "image")]
    pub image_url: String,
    pub tynt_score: i64,
}

/// One page of top-pages results for a category, in server order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pages {
    pub category: String,
    pub pages: Vec<Page>,
}

/// One page of top-images results for a category, in server order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Images {
    pub category: String,
    pub images: Vec<Image>,
}
