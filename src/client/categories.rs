//! Top-categories endpoint.

use super::TyntClient;
use super::error::Error;
use super::types::Category;
use super::wire::CategoriesResponse;

impl TyntClient {
    /// Retrieve the top (most engaging) categories.
    pub async fn top_categories(&self) -> Result<Vec<Category>, Error> {
        let resp: CategoriesResponse = self.get_json(self.top_categories_url()).await?;
        Ok(resp.categories)
    }
}
