use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A price exactly as the service reported it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(Number),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub product_name: String,
    #[serde(default)]
    pub current_price: Option<Price>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub product_image_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
