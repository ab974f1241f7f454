pub(crate) mod request;
pub(crate) mod response;

pub use request::{ScrapeFormat, ScrapeRequest};
pub use response::ScrapeDocument;
