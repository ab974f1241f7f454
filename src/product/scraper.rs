use std::sync::Arc;

use log::debug;
use serde_json::Value;

use super::observer::{LogObserver, ScrapeObserver};
use crate::core::{ScraperError, ScraperResult, ServiceError};
use crate::extraction::{ExtractionSpec, ProductRecord};
use crate::http::ScrapeDocument;
use crate::scrapers::ExtractionService;

/// Turns a product page URL into a validated [`ProductRecord`] with a single
/// call to an [`ExtractionService`].
pub struct ProductScraper<S> {
    service: S,
    spec: ExtractionSpec,
    observer: Arc<dyn ScrapeObserver>,
}

impl<S: ExtractionService> ProductScraper<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            spec: ExtractionSpec::product(),
            observer: Arc::new(LogObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ScrapeObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn spec(&self) -> &ExtractionSpec {
        &self.spec
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub async fn scrape_product(&self, url: &str) -> ScraperResult<ProductRecord> {
        let result = self.try_scrape(url).await;
        if let Err(err) = &result {
            self.observer.scrape_failed(url, err);
        }
        result
    }

    async fn try_scrape(&self, url: &str) -> ScraperResult<ProductRecord> {
        debug!("Scraping product from {}", url);
        let document = self.service.scrape(url, &self.spec).await?;
        self.observer.raw_response(url, &document);

        let record = record_from_document(document)?;
        debug!("Extracted product {:?} from {}", record.product_name, url);
        Ok(record)
    }
}

fn record_from_document(document: ScrapeDocument) -> ScraperResult<ProductRecord> {
    let payload = match document.json {
        Some(payload @ Value::Object(_)) => payload,
        _ => return Err(ScraperError::ExtractionFailure),
    };

    let has_name = payload
        .get("productName")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.is_empty());
    if !has_name {
        return Err(ScraperError::ExtractionFailure);
    }

    serde_json::from_value(payload)
        .map_err(|e| ScraperError::Transport(ServiceError::InvalidResponse(e)))
}
