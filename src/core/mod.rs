mod config;
mod errors;

pub use config::{FirecrawlConfig, API_KEY_VAR, API_URL_VAR, DEFAULT_API_URL, TIMEOUT_VAR};
pub use errors::{ConfigError, ScraperError, ScraperResult, ServiceError};
