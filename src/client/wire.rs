//! Internal wire types for serde deserialization.
//!
//! These types match the raw JSON structure from the Tynt API and are not
//! exposed publicly.

use serde::Deserialize;

use super::types::Category;

#[derive(Deserialize)]
pub(crate) struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Deserialize)]
pub(crate) struct TermsResponse {
    pub terms: Vec<String>,
}

/// Error body accompanying any HTTP status >= 400.
#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Deserialize)]
pub(crate) struct ErrorDetail {
    pub message: String,
}
