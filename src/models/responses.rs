use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body used by all three services: `{"detail": ...}`
///
/// `detail` is usually a string but validation failures carry a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: Value,
}

impl ErrorResponse {
    /// Human-readable message for the detail payload
    pub fn message(&self) -> String {
        match &self.detail {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
