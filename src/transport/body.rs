use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is missing the `{field}` field")]
    MissingField { field: &'static str },
}

/// Decode a 2xx response body. A blank body decodes as JSON `null`.
pub fn decode_json_body<T: DeserializeOwned>(body: &str) -> Result<T, BodyError> {
    if body.trim().is_empty() {
        return Ok(serde_json::from_value(Value::Null)?);
    }
    Ok(serde_json::from_str(body)?)
}

/// Pull the named collection out of a read response such as `{ "lists": [...] }`.
pub fn take_field<T: DeserializeOwned>(body: Value, field: &'static str) -> Result<T, BodyError> {
    let value = match body {
        Value::Object(mut map) => map.remove(field),
        _ => None,
    }
    .ok_or(BodyError::MissingField { field })?;
    Ok(serde_json::from_value(value)?)
}
