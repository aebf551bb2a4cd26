//! Configuration for the assistant and its Ollama backend
//!
//! Loaded from a TOML file when one is given, with defaults that point
//! at a stock local Ollama install.

use super::traits::GenerationOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentorConfig {
    /// Ollama backend configuration
    #[serde(default)]
    pub ollama: OllamaConfig,
}

impl MentorConfig {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}

/// Ollama-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    /// Hostname of the Ollama instance
    pub host: String,

    /// Port of the Ollama instance
    pub port: u16,

    /// Use HTTPS instead of HTTP
    pub use_https: bool,

    /// Model to generate with
    pub default_model: String,

    /// Sampling temperature (service default when unset)
    pub temperature: Option<f32>,

    /// Cap on generated tokens (service default when unset)
    pub max_tokens: Option<usize>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 11434,
            use_https: false,
            default_model: "codellama-3".to_string(),
            temperature: None,
            max_tokens: None,
        }
    }
}

impl OllamaConfig {
    /// Base URL of the Ollama instance
    pub fn url(&self) -> String {
        let protocol = if self.use_https { "https" } else { "http" };
        format!("{}://{}:{}", protocol, self.host, self.port)
    }

    /// Generation options derived from this configuration
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            stop: None,
        }
    }
}

/// Example configuration TOML
pub const EXAMPLE_CONFIG: &str = r#"
# code-mentor configuration

[ollama]
host = "localhost"
port = 11434
use_https = false
default_model = "codellama-3"
temperature = 0.2
max_tokens = 2048
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MentorConfig::default();
        assert_eq!(config.ollama.host, "localhost");
        assert_eq!(config.ollama.port, 11434);
        assert_eq!(config.ollama.url(), "http://localhost:11434");
        assert!(config.ollama.temperature.is_none());
    }

    #[test]
    fn test_parse_example_config() {
        let config: MentorConfig = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.ollama.default_model, "codellama-3");
        assert_eq!(config.ollama.temperature, Some(0.2));
        assert_eq!(config.ollama.max_tokens, Some(2048));
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: MentorConfig = toml::from_str("[ollama]\ndefault_model = \"codellama:13b\"\n").unwrap();
        assert_eq!(config.ollama.default_model, "codellama:13b");
        assert_eq!(config.ollama.port, 11434);

        let config: MentorConfig = toml::from_str("").unwrap();
        assert_eq!(config.ollama.host, "localhost");
    }

    #[test]
    fn test_https_url() {
        let config = OllamaConfig { use_https: true, ..OllamaConfig::default() };
        assert_eq!(config.url(), "https://localhost:11434");
    }

    #[test]
    fn test_generation_options_mirror_config() {
        let config = OllamaConfig {
            temperature: Some(0.7),
            max_tokens: Some(512),
            ..OllamaConfig::default()
        };
        let options = config.generation_options();
        assert_eq!(options.temperature, Some(0.7));
        assert_eq!(options.max_tokens, Some(512));
        assert!(options.stop.is_none());
    }
}
