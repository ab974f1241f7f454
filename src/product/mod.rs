mod observer;
mod scraper;


pub use observer::{LogObserver, NoopObserver, ScrapeObserver};
pub use scraper::ProductScraper;
