pub mod firecrawl;
pub mod mock_service;

mod scraper;
pub use firecrawl::{FirecrawlClient, FirecrawlClientError};
pub use mock_service::{MockReply, MockResponse, MockService};
pub use scraper::ExtractionService;
