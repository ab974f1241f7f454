use crate::core::ServiceError;
use crate::extraction::ExtractionSpec;
use crate::http::ScrapeDocument;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use super::ExtractionService;

#[derive(Debug, Clone)]
pub enum MockReply {
    Document(ScrapeDocument),
    Failure { status: u16, message: String },
}

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub reply: MockReply,
    pub delay: Option<Duration>,
}

impl MockResponse {
    pub fn document(document: ScrapeDocument) -> Self {
        Self {
            reply: MockReply::Document(document),
            delay: None,
        }
    }

    pub fn failure(status: u16, message: &str) -> Self {
        Self {
            reply: MockReply::Failure {
                status,
                message: message.to_string(),
            },
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Clone)]
pub struct MockService {
    responses: Arc<Vec<MockResponse>>,
    current_response: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(String, ExtractionSpec)>>>,
}

impl MockService {
    pub fn new(responses: Vec<MockResponse>) -> Self {
        assert!(!responses.is_empty(), "MockService needs at least one response");
        Self {
            responses: Arc::new(responses),
            current_response: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<(String, ExtractionSpec)> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ExtractionService for MockService {
    async fn scrape(&self, url: &str, spec: &ExtractionSpec) -> Result<ScrapeDocument, ServiceError> {
        self.requests.lock().push((url.to_string(), spec.clone()));

        let index = self.current_response.fetch_add(1, Ordering::SeqCst);
        let response = &self.responses[index % self.responses.len()];

        if let Some(delay) = response.delay {
            sleep(delay).await;
        }

        match &response.reply {
            MockReply::Document(document) => Ok(document.clone()),
            MockReply::Failure { status, message } => Err(ServiceError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
