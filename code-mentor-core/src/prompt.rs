//! Prompt construction for the assistance tasks
//!
//! A prompt is a fixed four-part concatenation: persona preamble,
//! complete-the-stubs instruction, task-specific block, then the trimmed
//! snippet under a `Code:` label. The order is not configurable.

use crate::detect::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Assistance task selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    Explain,
    Debug,
    Complete,
    Optimize,
}

impl Task {
    /// All tasks, in presentation order
    pub const ALL: [Task; 4] = [Task::Explain, Task::Debug, Task::Complete, Task::Optimize];

    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Explain => "Explain",
            Task::Debug => "Debug",
            Task::Complete => "Complete",
            Task::Optimize => "Optimize",
        }
    }

    /// Task-specific instruction block
    ///
    /// Exhaustive match so adding a task is a compile-time-checked change.
    fn instruction(&self) -> &'static str {
        match self {
            Task::Explain => {
                "Task: Explain the following code in simple terms.\n\
                 Also suggest improvements if any.\n\n"
            }
            Task::Debug => {
                "Task: Debug the following code.\n\
                 Identify issues, provide a corrected version, and explain the fixes.\n\n"
            }
            Task::Complete => {
                "Task: Complete the following incomplete code.\n\
                 Explain the logic and give an example usage.\n\n"
            }
            Task::Optimize => {
                "Task: Optimize the following code for better performance and readability.\n\
                 Also implement any incomplete function definitions.\n\
                 Explain the changes and provide a sample usage.\n\n"
            }
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Task {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "explain" => Ok(Task::Explain),
            "debug" => Ok(Task::Debug),
            "complete" => Ok(Task::Complete),
            "optimize" => Ok(Task::Optimize),
            other => Err(format!("unknown task '{other}' (expected explain, debug, complete, or optimize)")),
        }
    }
}

/// Build the full prompt for a task, snippet, and detected language
///
/// Pure and total: every combination of inputs yields a prompt.
pub fn build_prompt(task: Task, code: &str, language: Language) -> String {
    let mut prompt = format!(
        "You are CodeLlama, an expert AI coding assistant.\n\
         Act like a senior software engineer mentoring a junior developer.\n\
         Be clear, thorough, and provide examples.\n\
         Detected Language: {language}\n\n\
         If any functions are declared but not implemented, complete them.\n"
    );
    prompt.push_str(task.instruction());
    prompt.push_str(&format!("Code:\n{}\n", code.trim()));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_prompt_composition_order() {
        let prompt = build_prompt(Task::Debug, "x=1", Language::Python);

        let persona = prompt.find("You are CodeLlama").unwrap();
        let completion = prompt.find("If any functions are declared but not implemented").unwrap();
        let task_block = prompt.find("Task: Debug the following code.").unwrap();
        let code = prompt.find("Code:\nx=1").unwrap();

        assert!(persona < completion);
        assert!(completion < task_block);
        assert!(task_block < code);
    }

    #[test]
    fn test_prompt_inserts_language_label() {
        let prompt = build_prompt(Task::Explain, "int main() {}", Language::Cpp);
        assert!(prompt.contains("Detected Language: C++\n"));
    }

    #[test]
    fn test_debug_block_wording() {
        let prompt = build_prompt(Task::Debug, "x=1", Language::Python);
        assert!(prompt.contains("Identify issues, provide a corrected version, and explain the fixes."));
    }

    #[test]
    fn test_optimize_block_wording() {
        let prompt = build_prompt(Task::Optimize, "x=1", Language::Python);
        assert!(prompt.contains("Also implement any incomplete function definitions."));
        assert!(prompt.contains("provide a sample usage."));
    }

    #[test]
    fn test_each_task_has_distinct_block() {
        let blocks: Vec<&str> = Task::ALL.iter().map(|t| t.instruction()).collect();
        for (i, a) in blocks.iter().enumerate() {
            for b in &blocks[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_snippet_is_trimmed() {
        let prompt = build_prompt(Task::Complete, "  \n  def f():\n      pass  \n\n", Language::Python);
        assert!(prompt.ends_with("Code:\ndef f():\n      pass\n"));
    }

    #[test]
    fn test_task_round_trips_through_from_str() {
        for task in Task::ALL {
            assert_eq!(task.as_str().parse::<Task>().unwrap(), task);
        }
        assert!("translate".parse::<Task>().is_err());
    }
}
