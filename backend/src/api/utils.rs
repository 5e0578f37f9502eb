//! API utility functions
//!
//! Helpers used by the category handlers to turn the raw request path and
//! body into typed values.

use crate::error::AppError;
use crate::state::{CategoryId, CategoryPayload};
use serde_json::{Map, Value};

/// Path prefix shared by every single-category route
pub const CATEGORY_ITEM_PREFIX: &str = "/api/categories/";

/// Field names of a category request body
const PAYLOAD_FIELDS: [&str; 3] = ["id", "name", "description"];

/// Parse the category ID out of a request path
///
/// # Arguments
/// * `path` - Request path as received (percent-encoded), e.g. `/api/categories/3`
///
/// # Returns
/// * `Ok(CategoryId)` - Everything after the prefix decodes to a base-10 integer
/// * `Err(AppError::InvalidCategoryId)` - Prefix missing, or remainder is
///   empty, non-numeric, or contains further path segments
pub fn parse_category_id(path: &str) -> Result<CategoryId, AppError> {
    let raw = path
        .strip_prefix(CATEGORY_ITEM_PREFIX)
        .ok_or_else(|| AppError::InvalidCategoryId(path.to_string()))?;
    let decoded =
        urlencoding::decode(raw).map_err(|_| AppError::InvalidCategoryId(raw.to_string()))?;
    decoded
        .parse::<CategoryId>()
        .map_err(|_| AppError::InvalidCategoryId(decoded.to_string()))
}

/// Decode a create/update request body
///
/// Only the first JSON value in the body is read; anything after it is
/// ignored. That value must be an object or `null` (which yields an empty
/// payload). Object keys match field names case-insensitively, an exact
/// match winning over a folded one.
///
/// # Arguments
/// * `body` - Raw request body
///
/// # Returns
/// * `Ok(CategoryPayload)` - Decoded payload
/// * `Err(AppError::InvalidRequestBody)` - Body is empty, not JSON, not an
///   object, or has a field of the wrong type
pub fn decode_category_body(body: &[u8]) -> Result<CategoryPayload, AppError> {
    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next();

    match first {
        None => Err(AppError::InvalidRequestBody("empty body".to_string())),
        Some(Err(e)) => Err(AppError::InvalidRequestBody(e.to_string())),
        Some(Ok(Value::Null)) => Ok(CategoryPayload::default()),
        Some(Ok(Value::Object(object))) => {
            serde_json::from_value(Value::Object(canonical_fields(&object)))
                .map_err(|e| AppError::InvalidRequestBody(e.to_string()))
        }
        Some(Ok(other)) => Err(AppError::InvalidRequestBody(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

/// Re-key a body object onto the payload field names
fn canonical_fields(object: &Map<String, Value>) -> Map<String, Value> {
    let mut fields = Map::new();
    for field in PAYLOAD_FIELDS {
        let value = object.get(field).or_else(|| {
            object
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(field))
                .map(|(_, value)| value)
        });
        if let Some(value) = value {
            fields.insert(field.to_string(), value.clone());
        }
    }
    fields
}
