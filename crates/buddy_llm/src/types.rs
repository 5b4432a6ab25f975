//! Wire types for the Ollama generate API.

use serde::{Deserialize, Serialize};

/// Request body for `/api/generate`. `stream` is always `false` here; the
/// gateway consumes no partial results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}
