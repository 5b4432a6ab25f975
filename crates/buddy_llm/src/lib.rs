//! buddy-llm — prompt gateway for a locally hosted code-generation model.
//!
//! Turns a raw user prompt into an Ollama generate request (appending the
//! code-only instruction, streaming disabled) and unwraps the reply: either
//! the endpoint's entire payload or just the generated text.

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::{OllamaClient, PromptGateway};
pub use config::OllamaConfig;
pub use error::{LlmError, Result};
pub use prompt::{augment, CODE_ONLY_SUFFIX};
pub use types::GenerateRequest;
