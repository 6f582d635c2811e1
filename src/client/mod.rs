//! Tynt API client.
//!
//! Async client for the Tynt v1 REST API, built on reqwest. Every request
//! carries the caller's application ID as an `appid` cookie; the client
//! holds no other state and is safe to share across tasks.

pub mod error;
pub mod types;
pub(crate) mod wire;

mod categories;
mod images;
mod pages;
mod terms;


use serde::de::DeserializeOwned;

pub use error::Error;
pub use types::*;

use wire::ErrorBody;

/// Tynt API version this client speaks.
pub const API_VERSION: &str = "v1";

const DEFAULT_API_HOST: &str = "api.tynt.com";

/// Async client for the Tynt v1 REST API.
///
/// Construction requires a Tynt application ID. Each method issues one GET
/// request and reads the full response body before returning; there is no
/// retry, caching, or pagination.
pub struct TyntClient {
    http: reqwest::Client,
    base_url: String,
    top_url: String,
    app_id: String,
}

impl TyntClient {
    /// Create a client against the production Tynt API host.
    pub fn new(app_id: impl Into<String>) -> Result<Self, Error> {
        Self::with_host(DEFAULT_API_HOST, app_id)
    }

    /// Create a client against a custom API host.
    ///
    /// The Tynt API is served over plaintext HTTP; the base URL becomes
    /// `http://{host}/v1`.
    pub fn with_host(host: &str, app_id: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url(&format!("http://{host}/{API_VERSION}"), app_id)
    }

    /// Create a client with a full base URL override (for testing).
    pub fn with_base_url(base_url: &str, app_id: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build()?;
        let base_url = base_url.trim_end_matches('/').to_string();
        let top_url = format!("{base_url}/top/");
        Ok(Self {
            http,
            base_url,
            top_url,
            app_id: app_id.into(),
        })
    }

    /// The base URL all request URLs derive from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the top-categories listing, also the prefix of every
    /// category URL.
    pub fn top_categories_url(&self) -> &str {
        &self.top_url
    }

    /// The application ID sent with every request.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Build a category handle from a bare name, without a round trip.
    ///
    /// The result has no display name but is otherwise interchangeable with
    /// a server-returned [`Category`].
    pub fn category(&self, name: &str) -> Category {
        Category {
            display_name: None,
            name: name.to_string(),
            url: format!("{}{}", self.top_url, name),
        }
    }

    // ── HTTP helpers ────────────────────────────────────────────────────

    /// Send a GET request with the appid cookie and check the response
    /// status.
    pub(crate) async fn send(&self, url: &str) -> Result<reqwest::Response, Error> {
        tracing::debug!(%url, "GET");
        let resp = self
            .http
            .get(url)
            .header(reqwest::header::COOKIE, format!("appid={}", self.app_id))
            .send()
            .await?;
        Self::check_status(resp).await
    }

    /// Map non-success HTTP status codes to typed errors.
    ///
    /// Error responses carry an `{"error": {"message": ...}}` body; when
    /// that body is missing or malformed the error is still raised, with a
    /// generic message.
    pub(crate) async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let status = status.as_u16();
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| "unexpected server error".to_string());
        if status == 401 {
            Err(Error::Authentication { status, message })
        } else {
            Err(Error::Api { status, message })
        }
    }

    /// GET a JSON resource.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let resp = self.send(url).await?;
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
