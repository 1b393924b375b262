//! Regex helpers for the sectioned free text the analysis prompts ask for.
//!
//! A section is `Header:` followed by one item per line, terminated by a blank line or
//! the end of the reply. Line endings may be LF or CRLF. A missing header is not an
//! error: callers get an empty list.
//!
//! Headers and labels come from a small fixed set, so compiled patterns are cached
//! per pattern string.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use regex::Regex;

type PatternCache = OnceLock<Mutex<HashMap<String, Regex>>>;

static SECTION_PATTERNS: PatternCache = OnceLock::new();
static SCORE_PATTERNS: PatternCache = OnceLock::new();

/// Returns the trimmed, non-empty lines of the `header:` block.
///
/// `"Strengths:\n- A\n- B\n\n"` with header `Strengths` yields `["- A", "- B"]`.
pub fn extract_list_section(text: &str, header: &str) -> Vec<String> {
    let Some(re) = section_regex(header) else {
        return Vec::new();
    };

    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|block| {
            block
                .as_str()
                .split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Reads `label: N` (e.g. `Compatibility Score: 82`). `None` when absent.
pub fn extract_score(text: &str, label: &str) -> Option<u32> {
    let re = cached_regex(&SCORE_PATTERNS, format!(r"{}:\s*(\d+)", regex::escape(label)))?;
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

fn section_regex(header: &str) -> Option<Regex> {
    cached_regex(
        &SECTION_PATTERNS,
        format!(r"(?s){}:(.*?)(?:\r?\n\r?\n|\z)", regex::escape(header)),
    )
}

/// Compiles `pattern` once. `Regex` clones share the compiled program.
fn cached_regex(cache: &PatternCache, pattern: String) -> Option<Regex> {
    let mut patterns = cache
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(re) = patterns.get(&pattern) {
        return Some(re.clone());
    }
    let re = Regex::new(&pattern).ok()?;
    patterns.insert(pattern, re.clone());
    Some(re)
}

/// Parses the leading unsigned integer of `s`, ignoring leading whitespace
/// (`" 8/10"` → 8).
pub fn parse_leading_int(s: &str) -> Option<u32> {
    let digits: String = s
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Drops a leading list marker (`-`, `*`, `•`, `1.`, `2)`) from an item.
pub fn strip_list_marker(item: &str) -> &str {
    let item = item.trim();
    if let Some(rest) = item
        .strip_prefix('-')
        .or_else(|| item.strip_prefix('*'))
        .or_else(|| item.strip_prefix('•'))
    {
        return rest.trim_start();
    }

    let digits = item.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &item[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return rest.trim_start();
        }
    }
    item
}
