use crate::extraction::ExtractionSpec;
use serde::Serialize;
use serde_json::Value;

/// Body of a `POST /v2/scrape` call.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeRequest {
    pub url: String,
    pub formats: Vec<ScrapeFormat>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScrapeFormat {
    Json { schema: Value, prompt: String },
}

impl ScrapeRequest {
    pub fn new(url: &str, spec: &ExtractionSpec) -> Self {
        Self {
            url: url.to_string(),
            formats: vec![ScrapeFormat::Json {
                schema: spec.to_json_schema(),
                prompt: spec.instruction.clone(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let spec = ExtractionSpec::product();
        let body = serde_json::to_value(ScrapeRequest::new("https://example.com/widget", &spec)).unwrap();

        assert_eq!(
            body,
            json!({
                "url": "https://example.com/widget",
                "formats": [{
                    "type": "json",
                    "schema": spec.to_json_schema(),
                    "prompt": spec.instruction,
                }],
            })
        );
    }
}
