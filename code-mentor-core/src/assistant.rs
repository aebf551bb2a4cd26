//! End-to-end assistance pipeline
//!
//! Ties the pure transformations together around a provider: validate
//! the snippet, detect its language, build the prompt, generate a reply,
//! segment it for rendering.

use crate::detect::{Language, detect};
use crate::llm::errors::{LLMError, LLMResult};
use crate::llm::traits::{GenerationOptions, LLMProvider};
use crate::prompt::{Task, build_prompt};
use crate::segment::{Segment, segment};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of one assistance request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    /// Language the snippet was detected as
    pub language: Language,
    /// Raw reply text from the model
    pub raw: String,
    /// The reply split into renderable segments
    pub segments: Vec<Segment>,
}

/// Assistance pipeline over an arbitrary provider
pub struct Assistant<P> {
    provider: P,
    options: GenerationOptions,
}

impl<P: LLMProvider> Assistant<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, options: GenerationOptions::default() }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run one request through the full pipeline
    ///
    /// Blank input is rejected before detection; everything after the
    /// provider call is total, so any reply text yields a well-formed
    /// segment list.
    pub async fn run(&self, task: Task, code: &str) -> LLMResult<AssistantReply> {
        if code.trim().is_empty() {
            return Err(LLMError::invalid_request(
                "the code snippet is empty; paste some code first",
            ));
        }

        let language = detect(code);
        debug!(%language, %task, "running assistance pipeline");

        let prompt = build_prompt(task, code, language);
        let raw = self.provider.generate(&prompt, &self.options).await?;
        debug!(reply_len = raw.len(), "model reply received");

        let segments = segment(&raw);

        Ok(AssistantReply { language, raw, segments })
    }
}
