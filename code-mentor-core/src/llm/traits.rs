//! Traits for model provider implementations
//!
//! Defines the contract between the assistant pipeline and whatever
//! service produces replies, so the pipeline stays testable without a
//! running model.

use super::errors::LLMError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Options passed through to the model for a single generation
///
/// Unset fields fall back to the service's own defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

/// Core trait for model providers
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Get the name of this provider
    fn name(&self) -> &str;

    /// Get the model ID being used
    fn model(&self) -> &str;

    /// Check if the provider is reachable and configured
    async fn is_available(&self) -> bool;

    /// Generate a reply for a single prompt, non-streaming
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, LLMError>;

    /// List the models the provider can serve
    async fn list_models(&self) -> Result<Vec<String>, LLMError> {
        Err(LLMError::not_supported("model listing", self.name()))
    }
}
