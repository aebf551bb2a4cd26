//! Segmentation of model replies into renderable blocks
//!
//! Replies mix prose with fenced code. The reply is split on the
//! triple-backtick fence marker and every chunk is classified
//! independently by its content, not by its odd/even position in the
//! split. Empty chunks from consecutive fences are kept, so segment
//! count and order are reproducible for a given reply.

use serde::{Deserialize, Serialize};

/// The fence marker bounding code blocks in model output
pub const FENCE: &str = "```";

/// Language tags that mark a chunk as code, tested as prefixes in order
const CODE_TAGS: &[&str] = &["python", "cpp", "java", "js", "c"];

/// Keywords that mark a non-code chunk as sample output / usage
const SAMPLE_KEYWORDS: &[&str] = &["sample usage", "example", "output"];

/// One renderable piece of a model reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Fenced code: the declared tag and the body after the tag line
    CodeBlock { language: Option<String>, content: String },
    /// Prose that reads like sample output or usage, rendered monospace
    SampleOutput { content: String },
    /// Everything else, rendered as ordinary text
    Prose { content: String },
}

impl Segment {
    pub fn content(&self) -> &str {
        match self {
            Segment::CodeBlock { content, .. } => content,
            Segment::SampleOutput { content } => content,
            Segment::Prose { content } => content,
        }
    }
}

/// Split a raw model reply into an ordered list of segments
///
/// Total: any reply, however malformed its fencing, yields a defined
/// sequence. A reply without any fence marker is returned as-is in a
/// single `Prose` segment.
pub fn segment(reply: &str) -> Vec<Segment> {
    if !reply.contains(FENCE) {
        return vec![Segment::Prose { content: reply.to_string() }];
    }

    reply.split(FENCE).map(classify_chunk).collect()
}

/// Classify one inter-fence chunk by content
fn classify_chunk(chunk: &str) -> Segment {
    let trimmed = chunk.trim();

    if let Some(tag) = CODE_TAGS.iter().find(|tag| trimmed.starts_with(**tag)) {
        // The first line carries the tag; the body is everything after it
        let content = trimmed
            .split('\n')
            .skip(1)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();
        return Segment::CodeBlock { language: Some((*tag).to_string()), content };
    }

    let lowered = trimmed.to_lowercase();
    if SAMPLE_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
        return Segment::SampleOutput { content: trimmed.to_string() };
    }

    Segment::Prose { content: trimmed.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_without_fence_is_single_prose_segment() {
        let reply = "Just a plain explanation.";
        let segments = segment(reply);
        assert_eq!(segments, vec![Segment::Prose { content: reply.to_string() }]);
    }

    #[test]
    fn test_no_fence_reply_is_preserved_untrimmed() {
        let reply = "  spaced explanation  \n";
        let segments = segment(reply);
        assert_eq!(segments[0].content(), reply);
    }

    #[test]
    fn test_fenced_reply_splits_into_typed_segments() {
        let reply = "Explanation text\n```python\ndef f():\n    pass\n```\nExample: call f()";
        let segments = segment(reply);

        assert_eq!(
            segments,
            vec![
                Segment::Prose { content: "Explanation text".to_string() },
                Segment::CodeBlock {
                    language: Some("python".to_string()),
                    content: "def f():\n    pass".to_string(),
                },
                Segment::SampleOutput { content: "Example: call f()".to_string() },
            ]
        );
    }

    #[test]
    fn test_code_tag_is_prefix_matched_in_order() {
        // "cpp" wins over "c" because it is tested first
        let segments = segment("```cpp\nint main() {}\n```");
        assert_eq!(
            segments[1],
            Segment::CodeBlock {
                language: Some("cpp".to_string()),
                content: "int main() {}".to_string(),
            }
        );

        let segments = segment("```c\nint x;\n```");
        assert_eq!(
            segments[1],
            Segment::CodeBlock { language: Some("c".to_string()), content: "int x;".to_string() }
        );
    }

    #[test]
    fn test_tag_match_is_case_sensitive() {
        // "Python" does not match the lowercase tag list; the chunk falls
        // through to the keyword check and then to prose
        let segments = segment("```Python\nprint(1)\n```");
        assert!(matches!(segments[1], Segment::Prose { .. }));
    }

    #[test]
    fn test_sample_keywords_match_case_insensitively() {
        let segments = segment("intro\n```\nSample Usage: run it\n```");
        assert_eq!(
            segments[1],
            Segment::SampleOutput { content: "Sample Usage: run it".to_string() }
        );

        let segments = segment("intro\n```\nThe OUTPUT is 42\n```");
        assert_eq!(
            segments[1],
            Segment::SampleOutput { content: "The OUTPUT is 42".to_string() }
        );
    }

    #[test]
    fn test_consecutive_fences_preserve_empty_segment() {
        let segments = segment("before\n``````\nafter");
        assert_eq!(
            segments,
            vec![
                Segment::Prose { content: "before".to_string() },
                Segment::Prose { content: String::new() },
                Segment::Prose { content: "after".to_string() },
            ]
        );
    }

    #[test]
    fn test_unclosed_fence_still_segments() {
        let segments = segment("text before\n```python\ndef f(): pass");
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[1],
            Segment::CodeBlock {
                language: Some("python".to_string()),
                content: "def f(): pass".to_string(),
            }
        );
    }

    #[test]
    fn test_segmenting_prose_is_idempotent() {
        let reply = "An explanation without any code fences.";
        let first = segment(reply);
        let second = segment(first[0].content());
        assert_eq!(first, second);
    }
}
