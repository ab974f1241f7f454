use crate::core::ServiceError;
use crate::extraction::ExtractionSpec;
use crate::http::ScrapeDocument;
use async_trait::async_trait;
use std::sync::Arc;

/// A remote service that renders a page and extracts structured data from it.
#[async_trait]
pub trait ExtractionService: Send + Sync {
    async fn scrape(&self, url: &str, spec: &ExtractionSpec) -> Result<ScrapeDocument, ServiceError>;
}

#[async_trait]
impl<T: ExtractionService + ?Sized> ExtractionService for Arc<T> {
    async fn scrape(&self, url: &str, spec: &ExtractionSpec) -> Result<ScrapeDocument, ServiceError> {
        (**self).scrape(url, spec).await
    }
}

#[async_trait]
impl<T: ExtractionService + ?Sized> ExtractionService for Box<T> {
    async fn scrape(&self, url: &str, spec: &ExtractionSpec) -> Result<ScrapeDocument, ServiceError> {
        (**self).scrape(url, spec).await
    }
}
