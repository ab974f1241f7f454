use crate::core::ScraperError;
use crate::http::ScrapeDocument;
use log::{error, info};

/// Observability hook for [`ProductScraper`](super::ProductScraper).
pub trait ScrapeObserver: Send + Sync {
    fn raw_response(&self, url: &str, document: &ScrapeDocument);
    fn scrape_failed(&self, url: &str, error: &ScraperError);
}

/// Writes both notifications through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ScrapeObserver for LogObserver {
    fn raw_response(&self, url: &str, document: &ScrapeDocument) {
        info!("Raw scrape result for {}: {:?}", url, document);
    }

    fn scrape_failed(&self, url: &str, error: &ScraperError) {
        error!("Product scrape failed for {}: {}", url, error);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScrapeObserver for NoopObserver {
    fn raw_response(&self, _url: &str, _document: &ScrapeDocument) {}

    fn scrape_failed(&self, _url: &str, _error: &ScraperError) {}
}
