//! Gateway configuration.
//!
//! Explicit struct injected at construction rather than ambient globals, so
//! the client can be pointed at a fake endpoint in tests.

/// Default generate endpoint of a local Ollama instance.
pub const DEFAULT_API_URL: &str = "http://localhost:11434/api/generate";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "codellama";

/// Configuration for the Ollama generate endpoint.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Full URL of the generate endpoint.
    pub api_url: String,
    /// Model identifier sent on every request.
    pub model: String,
}

impl OllamaConfig {
    pub fn new() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Load configuration from `OLLAMA_API_URL` / `OLLAMA_MODEL`, falling back
    /// to the defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(api_url) = std::env::var("OLLAMA_API_URL") {
            config.api_url = api_url;
        }

        if let Ok(model) = std::env::var("OLLAMA_MODEL") {
            config.model = model;
        }

        config
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OllamaConfig::new();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_builder() {
        let config = OllamaConfig::new()
            .with_api_url("http://10.0.0.2:11434/api/generate")
            .with_model("deepseek-coder");
        assert_eq!(config.api_url, "http://10.0.0.2:11434/api/generate");
        assert_eq!(config.model, "deepseek-coder");
    }
}
