use clap::{Parser, Subcommand, ValueEnum};
use code_mentor_core::Task;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "code-mentor",
    version,
    about = "Code Mentor - AI coding assistance from a local Ollama model",
    long_about = "Code Mentor sends pasted code to a locally hosted model and renders the \
                  reply as formatted blocks. It detects the snippet's language heuristically \
                  and asks the model to explain, debug, complete, or optimize the code."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the assistant on a snippet
    #[command(about = "Send a snippet to the model and render the reply")]
    Assist(AssistArgs),

    /// Detect the language of a snippet
    #[command(about = "Print the heuristically detected language of a snippet")]
    Detect(DetectArgs),

    /// Show the prompt that would be sent
    #[command(about = "Build and print the model prompt without calling the model")]
    Prompt(PromptArgs),

    /// List models on the local Ollama instance
    #[command(about = "List the models available on the configured Ollama instance")]
    Models(ModelsArgs),
}

/// Assistance task, as selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum TaskArg {
    Explain,
    Debug,
    Complete,
    Optimize,
}

impl From<TaskArg> for Task {
    fn from(value: TaskArg) -> Self {
        match value {
            TaskArg::Explain => Task::Explain,
            TaskArg::Debug => Task::Debug,
            TaskArg::Complete => Task::Complete,
            TaskArg::Optimize => Task::Optimize,
        }
    }
}

#[derive(Parser, Debug)]
pub struct AssistArgs {
    /// What to ask the model to do with the snippet
    #[arg(short, long, value_enum, default_value = "explain")]
    pub task: TaskArg,

    /// File holding the snippet; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Override the configured model
    #[arg(short, long)]
    pub model: Option<String>,

    /// Print segments as JSON instead of rendered text
    #[arg(long)]
    pub json: bool,

    /// Print the constructed prompt before the reply
    #[arg(long)]
    pub show_prompt: bool,
}

#[derive(Parser, Debug)]
pub struct DetectArgs {
    /// File holding the snippet; reads stdin when omitted
    pub file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct PromptArgs {
    /// What to ask the model to do with the snippet
    #[arg(short, long, value_enum, default_value = "explain")]
    pub task: TaskArg,

    /// File holding the snippet; reads stdin when omitted
    pub file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ModelsArgs {
    /// Override the configured Ollama host
    #[arg(long)]
    pub host: Option<String>,
}
