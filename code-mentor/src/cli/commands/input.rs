//! Snippet input helper shared by the commands

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read the snippet from a file, or from stdin when no file is given
pub async fn read_snippet(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read snippet file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read snippet from stdin")?;
            Ok(buffer)
        }
    }
}
