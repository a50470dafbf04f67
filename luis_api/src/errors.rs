//! Error types for the LUIS client.

/// Errors that can occur when building or sending a LUIS query.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A model descriptor field was empty.
    #[error("LUIS model field `{field}` must not be empty")]
    InvalidModel { field: &'static str },
    /// The endpoint URL could not be parsed.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The service returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not a valid LUIS result.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}
