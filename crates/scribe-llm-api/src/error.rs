use thiserror::Error;

/// Failures that end a generation before any fragment is applied
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid endpoint URL {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned {status} without a response body")]
    NoBody { status: reqwest::StatusCode },

    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}
