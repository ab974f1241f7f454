use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The scraped document returned by the service. `json` holds the
/// structured extraction payload; everything else is carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapeDocument {
    #[serde(default)]
    pub json: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl ScrapeDocument {
    pub fn with_json(json: Value) -> Self {
        Self {
            json: Some(json),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScrapeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<ScrapeDocument>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}
