//! Fenced code block selection.
//!
//! Selection rules, by target language:
//! - javascript: a block tagged `js` first, then one tagged `javascript`;
//! - python: a block tagged `python`, no secondary fallback;
//! - anything else: the first fenced block regardless of its tag.
//!
//! Only the first matching block counts; the capture is non-greedy, so the
//! first closing fence terminates it. Fences present but nothing matching the
//! selected pattern yields an empty string, which is an outcome, not an error.

use std::sync::OnceLock;

use regex::Regex;

use crate::Language;

const FENCE: &str = "```";

// Tag patterns end on a word boundary so `js` does not swallow the opening of
// a `json` or `javascript` fence.
fn js_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```js\b(.*?)```").unwrap())
}

fn javascript_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```javascript\b(.*?)```").unwrap())
}

fn python_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```python\b(.*?)```").unwrap())
}

// Generic fence: an optional tag token on the opening line is excluded from
// the captured body.
fn any_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```(?:[A-Za-z0-9_+.#-]*\n)?(.*?)```").unwrap())
}

/// Extract the first fenced code block matching `language` from `text`.
///
/// Text without any fence delimiter is returned trimmed as-is. Text with
/// fences but no block matching the selected pattern yields an empty string.
/// Pure and idempotent; never fails.
pub fn extract(language: Language, text: &str) -> String {
    if !text.contains(FENCE) {
        return text.trim().to_string();
    }

    let captures = match language {
        Language::Javascript => js_block()
            .captures(text)
            .or_else(|| javascript_block().captures(text)),
        Language::Python => python_block().captures(text),
        Language::Other => any_block().captures(text),
    };

    captures
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
