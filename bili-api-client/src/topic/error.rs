//! Topic Client Error Types

use thiserror::Error;

use crate::credential::CredentialError;

#[derive(Debug, Error)]
pub enum TopicError {
    #[error("authentication required: {0}")]
    AuthenticationRequired(#[from] CredentialError),

    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for TopicError {
    fn from(err: reqwest::Error) -> Self {
        TopicError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for TopicError {
    fn from(err: serde_json::Error) -> Self {
        TopicError::Parse(err.to_string())
    }
}
