//! Ollama provider for local model execution
//!
//! Wraps a local (or remote) Ollama instance behind the provider trait.
//! Generation is a single non-streaming request against the completion
//! API; model management helpers cover listing and availability checks.

use super::config::OllamaConfig;
use super::errors::LLMError;
use super::traits::{GenerationOptions, LLMProvider};
use async_trait::async_trait;
use ollama_rs::Ollama;
use ollama_rs::generation::completion::request::GenerationRequest;
use ollama_rs::models::ModelOptions;
use tracing::debug;

/// Ollama provider implementation
pub struct OllamaProvider {
    client: Ollama,
    model_name: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider instance (doesn't connect yet)
    pub fn new(config: OllamaConfig) -> Self {
        let client = Ollama::new(config.url(), config.port);

        Self { client, model_name: config.default_model }
    }

    /// Create provider with custom model
    pub fn with_model(mut self, model: String) -> Self {
        self.model_name = model;
        self
    }

    /// Auto-detect a local Ollama installation
    pub async fn detect_local() -> Option<Self> {
        let provider = Self::new(OllamaConfig::default());

        match provider.client.list_local_models().await {
            Ok(_) => Some(provider),
            Err(_) => None,
        }
    }

    /// Check if a model is available locally
    pub async fn is_model_available(&self, model: &str) -> bool {
        match self.client.list_local_models().await {
            Ok(models) => models.iter().any(|m| m.name == model),
            Err(_) => false,
        }
    }

    fn convert_options(&self, options: &GenerationOptions) -> ModelOptions {
        let mut model_options = ModelOptions::default();

        if let Some(temperature) = options.temperature {
            model_options = model_options.temperature(temperature);
        }

        if let Some(max_tokens) = options.max_tokens {
            let num_predict = if max_tokens > i32::MAX as usize {
                i32::MAX
            } else {
                max_tokens as i32
            };
            model_options = model_options.num_predict(num_predict);
        }

        if let Some(stop) = &options.stop {
            model_options = model_options.stop(stop.clone());
        }

        model_options
    }
}

#[async_trait]
impl LLMProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model_name
    }

    async fn is_available(&self) -> bool {
        self.client.list_local_models().await.is_ok()
    }

    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, LLMError> {
        debug!(model = %self.model_name, prompt_len = prompt.len(), "sending generation request");

        let request = GenerationRequest::new(self.model_name.clone(), prompt.to_string())
            .options(self.convert_options(options));

        let response = self
            .client
            .generate(request)
            .await
            .map_err(|e| LLMError::network(e.to_string()))?;

        Ok(response.response)
    }

    async fn list_models(&self) -> Result<Vec<String>, LLMError> {
        let models = self
            .client
            .list_local_models()
            .await
            .map_err(|e| LLMError::network(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.name).collect())
    }
}

/// Builder for OllamaProvider
pub struct OllamaProviderBuilder {
    config: OllamaConfig,
    model: Option<String>,
}

impl OllamaProviderBuilder {
    pub fn new() -> Self {
        Self { config: OllamaConfig::default(), model: None }
    }

    pub fn host(mut self, host: String) -> Self {
        self.config.host = host;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn model(mut self, model: String) -> Self {
        self.model = Some(model);
        self
    }

    pub fn use_https(mut self, use_https: bool) -> Self {
        self.config.use_https = use_https;
        self
    }

    pub fn build(self) -> OllamaProvider {
        let mut provider = OllamaProvider::new(self.config);
        if let Some(model) = self.model {
            provider = provider.with_model(model);
        }
        provider
    }
}

impl Default for OllamaProviderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
