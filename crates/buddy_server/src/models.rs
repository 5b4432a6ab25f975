//! Request bodies for the gateway surface.

use serde::Deserialize;

/// Body of both proxy endpoints.
#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}
