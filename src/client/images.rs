//! Top-images endpoint.

use super::TyntClient;
use super::error::Error;
use super::types::{Category, Images};

impl TyntClient {
    /// Retrieve the top (most engaging) images for a category.
    pub async fn top_images(&self, category: &Category) -> Result<Images, Error> {
        self.get_json(&format!("{}/images", category.url)).await
    }

    /// Retrieve the top images for a category given only its name.
    pub async fn top_images_for(&self, category_name: &str) -> Result<Images, Error> {
        self.top_images(&self.category(category_name)).await
    }
}
