//! Prompt command - build and print the prompt without calling the model

use super::read_snippet;
use crate::cli::app::PromptArgs;
use anyhow::Result;
use code_mentor_core::{build_prompt, detect};

pub async fn execute(args: PromptArgs) -> Result<()> {
    let code = read_snippet(args.file.as_deref()).await?;
    if code.trim().is_empty() {
        println!("Please enter code before building a prompt.");
        return Ok(());
    }

    let language = detect(&code);
    print!("{}", build_prompt(args.task.into(), &code, language));

    Ok(())
}
