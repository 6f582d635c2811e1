//! Top-pages endpoint.

use super::TyntClient;
use super::error::Error;
use super::types::{Category, Pages};

impl TyntClient {
    /// Retrieve the top (most engaging) pages for a category.
    pub async fn top_pages(&self, category: &Category) -> Result<Pages, Error> {
        self.get_json(&format!("{}/pages", category.url)).await
    }

    /// Retrieve the top pages for a category given only its name.
    pub async fn top_pages_for(&self, category_name: &str) -> Result<Pages, Error> {
        self.top_pages(&self.category(category_name)).await
    }
}
