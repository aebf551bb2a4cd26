//! Model-service boundary
//!
//! The assistant hands a constructed prompt to a provider and gets back
//! raw reply text. One prompt in, one reply out, no streaming; timeout
//! and retry policy belong to the caller.

pub mod config;
pub mod errors;
pub mod mock;
pub mod ollama;
pub mod traits;

pub use config::{MentorConfig, OllamaConfig};
pub use errors::{LLMError, LLMResult};
pub use ollama::{OllamaProvider, OllamaProviderBuilder};
pub use traits::{GenerationOptions, LLMProvider};
