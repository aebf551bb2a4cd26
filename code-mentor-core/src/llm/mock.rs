//! Mock model provider for testing
//!
//! Scripted provider used by pipeline tests. Not available in
//! production builds.

#![cfg(test)]

use super::errors::LLMError;
use super::traits::{GenerationOptions, LLMProvider};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mock provider that replays scripted replies and records prompts
#[derive(Clone)]
pub struct MockProvider {
    model: String,
    replies: Arc<Mutex<Vec<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    available: bool,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            model: "mock-model".to_string(),
            replies: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            available: true,
        }
    }

    /// Queue a reply; replies are returned in insertion order
    pub fn add_reply(&self, reply: impl Into<String>) {
        self.replies.lock().unwrap().push(reply.into());
    }

    /// Prompts seen by `generate`, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn generate(
        &self,
        prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<String, LLMError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(LLMError::api(500, "mock provider has no scripted reply"));
        }
        Ok(replies.remove(0))
    }
}
