//! Error types for the Tynt API client.

/// Errors returned by the Tynt API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body failed to parse as the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server-reported error (HTTP status >= 400, other than 401).
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Authentication failure (401), kept distinct so callers can branch
    /// on credential problems without matching on the message.
    #[error("authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },
}

impl Error {
    /// Numeric error code: the HTTP status for server-reported errors,
    /// -1 for transport and parse failures.
    pub fn code(&self) -> i32 {
        match self {
            Error::Http(_) | Error::Json(_) => -1,
            Error::Api { status, .. } | Error::Authentication { status, .. } => {
                i32::from(*status)
            }
        }
    }
}
