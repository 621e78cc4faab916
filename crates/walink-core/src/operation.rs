use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::request::LaunchRequest;

pub const LAUNCH_WHATSAPP: &str = "launchWhatsApp";

/// A named call from the application layer with its raw argument map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// Operations the host understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    LaunchWhatsApp(LaunchRequest),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("method not implemented: {method}")]
pub struct UnsupportedOperation {
    pub method: String,
}

impl Operation {
    pub fn from_call(call: &MethodCall) -> Result<Self, UnsupportedOperation> {
        match call.method.as_str() {
            LAUNCH_WHATSAPP => Ok(Self::LaunchWhatsApp(LaunchRequest::from_arguments(
                &call.arguments,
            ))),
            other => Err(UnsupportedOperation {
                method: other.to_string(),
            }),
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            Self::LaunchWhatsApp(_) => LAUNCH_WHATSAPP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResponse {
    Success { result: bool },
    NotImplemented { method: String },
}

impl From<UnsupportedOperation> for MethodResponse {
    fn from(err: UnsupportedOperation) -> Self {
        Self::NotImplemented { method: err.method }
    }
}
