use thiserror::Error;

/// Failure raised by an [`ExtractionService`](crate::scrapers::ExtractionService)
/// while talking to the remote scraping API.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Scrape API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed service response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("No product data extracted.")]
    ExtractionFailure,

    #[error(transparent)]
    Transport(#[from] ServiceError),
}

pub type ScraperResult<T> = Result<T, ScraperError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing API key: set {0}")]
    MissingApiKey(&'static str),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid timeout {value:?}: expected whole seconds")]
    InvalidTimeout { value: String },
}
