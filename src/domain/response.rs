use serde::{Deserialize, Serialize};

use crate::domain::value::ResponseCode;

/// Envelope returned by Iterable mutation endpoints: `{ msg, code, params }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub msg: String,
    pub code: ResponseCode,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.code.is_success()
    }
}
