use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures talking to the Genius API or fetching a song page
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("GENIUS_API_KEY is not set (export it or add it to a .env file)")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
