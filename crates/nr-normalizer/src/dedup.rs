//! Duplicate record suppression keyed on 4-digit tokens.
//!
//! Every token seen more than once in the text loses the line holding its
//! first unresolved occurrence. Later occurrences stay.

use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}\b").unwrap());

/// Count word-bounded 4-digit tokens across the whole text.
pub fn token_counts(text: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for m in RE_TOKEN.find_iter(text) {
        *counts.entry(m.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Tokens occurring at least twice, with their counts.
pub fn repeated_tokens(text: &str) -> BTreeMap<String, usize> {
    token_counts(text)
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(t, n)| (t.to_string(), n))
        .collect()
}

/// Suppress, returning the kept text and the tokens resolved, in order.
pub fn suppress_with_report(text: &str) -> (String, Vec<String>) {
    let mut pending: HashSet<&str> = token_counts(text)
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(t, _)| t)
        .collect();
    let mut resolved = Vec::new();
    let mut kept = Vec::new();

    for line in text.lines() {
        let hit = RE_TOKEN
            .find_iter(line)
            .map(|m| m.as_str())
            .find(|t| pending.contains(t));
        match hit {
            Some(token) => {
                pending.remove(token);
                resolved.push(token.to_string());
            }
            None => kept.push(line),
        }
    }
    (kept.join("\n"), resolved)
}

pub fn suppress(text: &str) -> String {
    suppress_with_report(text).0
}
