//! Models command - list models on the configured Ollama instance

use super::assist::load_config;
use crate::cli::app::ModelsArgs;
use anyhow::{Context, Result};
use code_mentor_core::llm::{LLMProvider, OllamaProvider};
use std::path::PathBuf;

pub async fn execute(args: ModelsArgs, config_path: Option<PathBuf>) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(host) = args.host {
        config.ollama.host = host;
    }

    let url = config.ollama.url();
    let provider = OllamaProvider::new(config.ollama);

    let models = provider
        .list_models()
        .await
        .with_context(|| format!("Failed to list models from {}", url))?;

    if models.is_empty() {
        println!("No models installed on {}", url);
        return Ok(());
    }

    println!("Models on {}:", url);
    for model in models {
        println!("  {}", model);
    }

    Ok(())
}
