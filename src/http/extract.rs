//! Request parsing helpers for path ids and JSON bodies

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::routes::AppError;

pub const INVALID_ID: &str = "invalid id";
pub const INVALID_DATA: &str = "invalid data";
pub const INVALID_JSON: &str = "invalid json";

/// Parse the trailing path segment as a record id
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(INVALID_ID.to_string()))
}

/// Decode a request body into `T`.
///
/// An empty body decodes as `T::default()`, so field-presence checks decide
/// the outcome. Anything other than a JSON object is rejected.
pub fn parse_body<T>(body: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|_| AppError::BadRequest(INVALID_JSON.to_string()))?;

    if !value.is_object() {
        return Err(AppError::BadRequest(INVALID_DATA.to_string()));
    }

    serde_json::from_value(value).map_err(|_| AppError::BadRequest(INVALID_DATA.to_string()))
}
