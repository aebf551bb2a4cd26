//! Heuristic language detection for pasted code snippets
//!
//! Classification is a fixed, ordered cascade of lexical rules with
//! first-match-wins semantics. The order is load-bearing: the rules are
//! not mutually exclusive, so earlier rules deliberately shadow later
//! ones (a snippet with both `print(` and `console.log(` is Python).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Label assigned to a snippet by the detection cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Cpp,
    Java,
    JavaScript,
    Go,
    Ruby,
    Php,
    Shell,
    Sql,
    Html,
    Css,
    Json,
    Unknown,
}

impl Language {
    /// User-facing label, as inserted into prompts and printed by the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::Go => "Go",
            Language::Ruby => "Ruby",
            Language::Php => "PHP",
            Language::Shell => "Shell",
            Language::Sql => "SQL",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Json => "JSON",
            Language::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! pattern {
    ($name:ident, $re:literal) => {
        static $name: Lazy<Regex> =
            Lazy::new(|| Regex::new($re).expect("Invalid regex pattern"));
    };
}

pattern!(PYTHON_DEF, r"(?m)^\s*def\s+\w+\s*\(");
pattern!(PYTHON_IMPORT, r"(?m)^\s*import\s+\w+");
pattern!(C_INCLUDE, r"#include\s*<\w+>");
pattern!(C_MAIN, r"\bint\s+main\s*\(");
pattern!(JAVA_CLASS, r"public\s+class\s+\w+");
pattern!(JAVA_MAIN, r"public\s+static\s+void\s+main\s*\(");
pattern!(JS_FUNCTION, r"function\s+\w+\s*\(");
pattern!(JS_CONSOLE, r"console\.log\(");
pattern!(JS_LET, r"let\s+\w+");
pattern!(JS_CONST, r"const\s+\w+");
pattern!(GO_PACKAGE, r"package\s+main");
pattern!(GO_MAIN, r"func\s+main\s*\(");
pattern!(RUBY_DEF, r"(?m)^\s*def\s+\w+");
pattern!(PHP_VAR, r"\$\w+");
pattern!(SHELL_ECHO, r"\becho\s+");
pattern!(SQL_SELECT, r"(?i)SELECT\s+.+\s+FROM\s+.+");
pattern!(HTML_DOCTYPE, r"(?i)<!DOCTYPE html>");
pattern!(HTML_TAG, r"(?i)<html.*>");
pattern!(CSS_CLASS, r"\.\w+\s*\{");
pattern!(CSS_ID, r"#\w+\s*\{");

fn is_python(code: &str) -> bool {
    PYTHON_DEF.is_match(code) || PYTHON_IMPORT.is_match(code) || code.contains("print(")
}

fn is_cpp(code: &str) -> bool {
    C_INCLUDE.is_match(code) || C_MAIN.is_match(code)
}

fn is_java(code: &str) -> bool {
    JAVA_CLASS.is_match(code) || JAVA_MAIN.is_match(code)
}

fn is_javascript(code: &str) -> bool {
    JS_FUNCTION.is_match(code)
        || JS_CONSOLE.is_match(code)
        || JS_LET.is_match(code)
        || JS_CONST.is_match(code)
}

fn is_go(code: &str) -> bool {
    GO_PACKAGE.is_match(code) || GO_MAIN.is_match(code)
}

/// Ruby needs both a `def` line and the `end` keyword somewhere
fn is_ruby(code: &str) -> bool {
    RUBY_DEF.is_match(code) && code.contains("end")
}

/// Any dollar-prefixed token counts, so prose containing `$100` matches
/// too. Known heuristic weakness; the cascade keeps it.
fn is_php(code: &str) -> bool {
    code.starts_with("<?php") || PHP_VAR.is_match(code)
}

fn is_shell(code: &str) -> bool {
    code.starts_with("#!/bin/bash") || code.starts_with("#!/bin/sh") || SHELL_ECHO.is_match(code)
}

fn is_sql(code: &str) -> bool {
    SQL_SELECT.is_match(code)
}

fn is_html(code: &str) -> bool {
    HTML_DOCTYPE.is_match(code) || HTML_TAG.is_match(code)
}

fn is_css(code: &str) -> bool {
    CSS_CLASS.is_match(code) || CSS_ID.is_match(code)
}

/// Brace-delimited AND well-formed; a parse failure is a non-match,
/// never an error
fn is_json(code: &str) -> bool {
    code.starts_with('{')
        && code.ends_with('}')
        && serde_json::from_str::<serde_json::Value>(code).is_ok()
}

/// The cascade, in precedence order
static RULES: &[(Language, fn(&str) -> bool)] = &[
    (Language::Python, is_python),
    (Language::Cpp, is_cpp),
    (Language::Java, is_java),
    (Language::JavaScript, is_javascript),
    (Language::Go, is_go),
    (Language::Ruby, is_ruby),
    (Language::Php, is_php),
    (Language::Shell, is_shell),
    (Language::Sql, is_sql),
    (Language::Html, is_html),
    (Language::Css, is_css),
    (Language::Json, is_json),
];

/// Classify a snippet into exactly one language label
///
/// Total over all inputs: every snippet (including the empty string) maps
/// to a label, with `Unknown` as the fallback.
pub fn detect(snippet: &str) -> Language {
    let code = snippet.trim();

    for (language, matches) in RULES {
        if matches(code) {
            trace!(%language, "snippet matched detection rule");
            return *language;
        }
    }

    Language::Unknown
}
