use async_trait::async_trait;
use log::{debug, trace};
use reqwest::{header, Client, ClientBuilder};
use thiserror::Error;
use url::Url;

use super::ExtractionService;
use crate::core::{FirecrawlConfig, ServiceError};
use crate::extraction::ExtractionSpec;
use crate::http::response::{ErrorBody, ScrapeResponse};
use crate::http::{ScrapeDocument, ScrapeRequest};

const USER_AGENT: &str = concat!("product-scraper/", env!("CARGO_PKG_VERSION"));
const SCRAPE_PATH: &str = "v2/scrape";

#[derive(Debug, Error)]
pub enum FirecrawlClientError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Invalid API key header: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
    #[error("Invalid scrape endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

#[derive(Clone)]
pub struct FirecrawlClient {
    client: Client,
    endpoint: Url,
}

impl FirecrawlClient {
    pub fn new(config: FirecrawlConfig) -> Result<Self, FirecrawlClientError> {
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))?;
        auth.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);

        let mut builder = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.base_url.join(SCRAPE_PATH)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ExtractionService for FirecrawlClient {
    async fn scrape(&self, url: &str, spec: &ExtractionSpec) -> Result<ScrapeDocument, ServiceError> {
        let body = ScrapeRequest::new(url, spec);
        debug!("Requesting extraction of {} from {}", url, self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        trace!("Scrape API replied {} with {} bytes", status, text.len());

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.error)
                .unwrap_or(text);
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ScrapeResponse = serde_json::from_str(&text)?;
        if !envelope.success {
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: envelope
                    .error
                    .unwrap_or_else(|| "scrape reported failure".to_string()),
            });
        }

        Ok(envelope.data.unwrap_or_default())
    }
}
