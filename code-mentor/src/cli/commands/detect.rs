//! Detect command - print the heuristically detected language

use super::read_snippet;
use crate::cli::app::DetectArgs;
use anyhow::Result;
use code_mentor_core::detect;

pub async fn execute(args: DetectArgs) -> Result<()> {
    let code = read_snippet(args.file.as_deref()).await?;
    if code.trim().is_empty() {
        println!("Nothing to detect: the snippet is empty.");
        return Ok(());
    }

    println!("{}", detect(&code));

    Ok(())
}
