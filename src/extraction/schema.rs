use serde_json::{json, Map, Value};

pub const PRODUCT_PROMPT: &str = "Extract:
- product name as \"productName\"
- product price as \"currentPrice\"
- currency code as \"currencyCode\"
- product image URL as \"productImageUrl\"

If price is not visible, return null for currentPrice.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub types: Vec<FieldType>,
    pub nullable: bool,
}

impl FieldSpec {
    pub fn new(name: &str, types: &[FieldType]) -> Self {
        Self {
            name: name.to_string(),
            types: types.to_vec(),
            nullable: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    fn type_value(&self) -> Value {
        let mut names: Vec<&str> = self.types.iter().map(FieldType::as_str).collect();
        if self.nullable {
            names.push("null");
        }

        match names.as_slice() {
            [single] => Value::from(*single),
            _ => Value::from(names),
        }
    }
}

/// What to pull out of a page: the fields, which of them must be present,
/// and the natural-language instruction handed to the extraction model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSpec {
    pub fields: Vec<FieldSpec>,
    pub required: Vec<String>,
    pub instruction: String,
}

impl ExtractionSpec {
    pub fn product() -> Self {
        Self {
            fields: vec![
                FieldSpec::new("productName", &[FieldType::String]),
                FieldSpec::new("currentPrice", &[FieldType::Number, FieldType::String]).nullable(),
                FieldSpec::new("currencyCode", &[FieldType::String]).nullable(),
                FieldSpec::new("productImageUrl", &[FieldType::String]).nullable(),
            ],
            required: vec!["productName".to_string()],
            instruction: PRODUCT_PROMPT.to_string(),
        }
    }

    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|field| (field.name.clone(), json!({ "type": field.type_value() })))
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required,
        })
    }
}
