pub mod core;
pub mod extraction;
pub mod http;
pub mod product;
pub mod scrapers;

pub use crate::core::{ConfigError, FirecrawlConfig, ScraperError, ScraperResult, ServiceError};
pub use crate::extraction::{ExtractionSpec, Price, ProductRecord};
pub use crate::http::ScrapeDocument;
pub use crate::product::{LogObserver, NoopObserver, ProductScraper, ScrapeObserver};
pub use crate::scrapers::{ExtractionService, FirecrawlClient};
