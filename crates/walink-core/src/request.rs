use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A caller's ask to open a chat. Borrowed by the dispatcher, never changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRequest {
    pub phone: String,
    pub message: String,
}

impl LaunchRequest {
    pub fn new(phone: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            message: message.into(),
        }
    }

    /// Reads `phone` and `message` from a method-call argument map. Both are
    /// trimmed; anything missing or not a string becomes empty.
    pub fn from_arguments(arguments: &Value) -> Self {
        Self {
            phone: string_argument(arguments, "phone"),
            message: string_argument(arguments, "message"),
        }
    }
}

fn string_argument(arguments: &Value, key: &str) -> String {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
