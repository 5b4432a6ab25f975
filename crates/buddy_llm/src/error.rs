//! Gateway error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport-level failure reaching the inference endpoint.
    #[error("inference request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("inference endpoint returned {status}: {body}")]
    Endpoint {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The endpoint payload was not valid JSON.
    #[error("malformed inference payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The payload carried no textual `response` field.
    #[error("response field is missing in the inference payload")]
    MissingResponseField,
}

pub type Result<T> = std::result::Result<T, LlmError>;
