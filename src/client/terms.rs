//! Top-search-terms endpoint.

use super::TyntClient;
use super::error::Error;
use super::types::Category;
use super::wire::TermsResponse;

impl TyntClient {
    /// Retrieve the top search terms leading readers to a category.
    pub async fn top_search_terms(&self, category: &Category) -> Result<Vec<String>, Error> {
        let resp: TermsResponse = self.get_json(&format!("{}/terms", category.url)).await?;
        Ok(resp.terms)
    }

    /// Retrieve the top search terms for a category given only its name.
    pub async fn top_search_terms_for(&self, category_name: &str) -> Result<Vec<String>, Error> {
        self.top_search_terms(&self.category(category_name)).await
    }
}
