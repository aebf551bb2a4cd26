//! Assist command - run the full assistance pipeline on a snippet

use super::read_snippet;
use crate::cli::app::AssistArgs;
use anyhow::{Context, Result};
use code_mentor_core::llm::{MentorConfig, OllamaProvider};
use code_mentor_core::{Assistant, Segment, Task};
use std::path::PathBuf;

/// Run the assistant and render the segmented reply
pub async fn execute(args: AssistArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let task: Task = args.task.into();

    let code = read_snippet(args.file.as_deref()).await?;
    if code.trim().is_empty() {
        println!("Please enter code before running the assistant.");
        return Ok(());
    }

    let mut ollama = config.ollama;
    if let Some(model) = args.model {
        ollama.default_model = model;
    }

    let options = ollama.generation_options();
    let provider = OllamaProvider::new(ollama);
    let assistant = Assistant::new(provider).with_options(options);

    let reply = assistant
        .run(task, &code)
        .await
        .context("The model request failed")?;

    if args.show_prompt {
        println!(
            "{}\n",
            code_mentor_core::build_prompt(task, &code, reply.language)
        );
    }

    println!("Code Assistant Output - Task: {}", task);
    println!("Detected Language: {}\n", reply.language);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reply.segments)?);
    } else {
        for segment in &reply.segments {
            println!("{}", render(segment));
        }
    }

    Ok(())
}

/// Load the TOML config if a path was given, defaults otherwise
pub fn load_config(path: Option<PathBuf>) -> Result<MentorConfig> {
    match path {
        Some(path) => MentorConfig::from_file(&path),
        None => Ok(MentorConfig::default()),
    }
}

/// Render one segment for the terminal
fn render(segment: &Segment) -> String {
    match segment {
        Segment::CodeBlock { language, content } => {
            format!("```{}\n{}\n```", language.as_deref().unwrap_or(""), content)
        }
        Segment::SampleOutput { content } => {
            format!("Sample Output / Usage:\n```\n{}\n```", content)
        }
        Segment::Prose { content } => content.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_code_block() {
        let segment = Segment::CodeBlock {
            language: Some("python".to_string()),
            content: "def f():\n    pass".to_string(),
        };
        assert_eq!(render(&segment), "```python\ndef f():\n    pass\n```");
    }

    #[test]
    fn test_render_sample_output_is_labeled() {
        let segment = Segment::SampleOutput { content: "Example: f()".to_string() };
        let rendered = render(&segment);
        assert!(rendered.starts_with("Sample Output / Usage:"));
        assert!(rendered.contains("Example: f()"));
    }

    #[test]
    fn test_render_prose_is_verbatim() {
        let segment = Segment::Prose { content: "Plain explanation.".to_string() };
        assert_eq!(render(&segment), "Plain explanation.");
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config.ollama.host, "localhost");
    }
}
