use serde::Serialize;
use serde_json::Value;

use crate::domain::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("query parameters could not be serialized: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Flatten a serializable map into query pairs.
///
/// Arrays repeat the key, `null` entries are dropped, nested objects are sent
/// as JSON text. Anything other than an object (or unit/`null`) is rejected.
pub fn encode_query<P>(params: &P) -> Result<Vec<(String, String)>, QueryError>
where
    P: Serialize + ?Sized,
{
    let map = match serde_json::to_value(params)? {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        _ => return Err(ValidationError::NotAnObject { field: "params" }.into()),
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar(item) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar(other) {
                    pairs.push((key, text));
                }
            }
        }
    }
    Ok(pairs)
}

fn scalar(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        nested => Some(nested.to_string()),
    }
}
