mod record;
mod schema;

pub use record::{Price, ProductRecord};
pub use schema::{ExtractionSpec, FieldSpec, FieldType, PRODUCT_PROMPT};
