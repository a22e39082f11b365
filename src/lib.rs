pub mod auth;
pub mod blocking;
pub mod check;
pub mod client;
pub mod config;
pub mod fixture;
pub mod resource;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

pub use config::Config;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(status: &str, message: &str) -> Self {
        ApiError {
            status: status.to_string(),
            message: message.to_string(),
            details: None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: '{}'", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("unexpected status: expected {expected}, got {actual}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
    },

    #[error("response is missing the '{0}' field")]
    MissingField(String),

    #[error("unexpected '{field}': expected {expected:?}, got {actual:?}")]
    FieldMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("config: {0}")]
    Config(String),
}
