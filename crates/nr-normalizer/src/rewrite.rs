//! Ordered multiline rewrite rules.
//!
//! Each rule sees the whole output of the previous one. The record rule
//! (6) must run after the whitespace rules (3-5), and the indentation rule
//! (7) must run last so it sees canonical `N` / `ON` record lines.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Nine ideographic spaces prefixed to unmarked body lines.
pub const BODY_INDENT: &str = "\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}";

static RE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^.+$").unwrap());

enum RuleKind {
    /// `replace_all` with a `${n}` template.
    Replace { pattern: Regex, template: &'static str },
    /// Delete a match of `pattern` only when `context` matches right after
    /// it. The `run` group ends the pattern and gives back one char at a
    /// time until the context fits.
    StripBefore { pattern: Regex, context: Regex },
    /// Prefix every non-empty line that has no `marker` match.
    PrefixUnmarked { marker: Regex, prefix: &'static str },
}

/// A named rewrite rule.
pub struct ReplacementRule {
    name: &'static str,
    kind: RuleKind,
}

impl ReplacementRule {
    pub fn replace(
        name: &'static str,
        pattern: &str,
        template: &'static str,
    ) -> Result<Self, regex::Error> {
        let pattern = Regex::new(pattern)?;
        Ok(Self { name, kind: RuleKind::Replace { pattern, template } })
    }

    /// `pattern` must contain a `run` group at its very end.
    pub fn strip_before(
        name: &'static str,
        pattern: &str,
        context: &str,
    ) -> Result<Self, regex::Error> {
        let pattern = Regex::new(pattern)?;
        let context = Regex::new(&format!(r"\A(?:{context})"))?;
        Ok(Self { name, kind: RuleKind::StripBefore { pattern, context } })
    }

    pub fn prefix_unmarked(
        name: &'static str,
        marker: &str,
        prefix: &'static str,
    ) -> Result<Self, regex::Error> {
        let marker = Regex::new(marker)?;
        Ok(Self { name, kind: RuleKind::PrefixUnmarked { marker, prefix } })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply this rule to the whole text.
    pub fn apply(&self, text: &str) -> String {
        match &self.kind {
            RuleKind::Replace { pattern, template } => {
                pattern.replace_all(text, *template).into_owned()
            }
            RuleKind::StripBefore { pattern, context } => strip_before(text, pattern, context),
            RuleKind::PrefixUnmarked { marker, prefix } => RE_LINE
                .replace_all(text, |caps: &Captures| {
                    let line = &caps[0];
                    if marker.is_match(line) {
                        line.to_string()
                    } else {
                        format!("{prefix}{line}")
                    }
                })
                .into_owned(),
        }
    }
}

impl std::fmt::Debug for ReplacementRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplacementRule").field("name", &self.name).finish()
    }
}

fn strip_before(text: &str, pattern: &Regex, context: &Regex) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut pos = 0;

    while pos < text.len() {
        let Some(caps) = pattern.captures_at(text, pos) else { break };
        let Some(whole) = caps.get(0) else { break };
        let run_start = caps.name("run").map_or(whole.start(), |m| m.start());

        match shrink_until(text, run_start, whole.end(), context) {
            Some(end) => {
                out.push_str(&text[last..whole.start()]);
                last = end;
                pos = end;
            }
            None => pos = next_char(text, whole.start()),
        }
    }
    out.push_str(&text[last..]);
    out
}

/// Largest end in `(run_start, end]` where `context` matches. The run keeps
/// at least one char.
fn shrink_until(text: &str, run_start: usize, mut end: usize, context: &Regex) -> Option<usize> {
    while end > run_start {
        if context.is_match(&text[end..]) {
            return Some(end);
        }
        end = text[..end].char_indices().next_back().map(|(i, _)| i)?;
    }
    None
}

fn next_char(text: &str, at: usize) -> usize {
    text[at..].chars().next().map_or(text.len(), |c| at + c.len_utf8())
}

/// The transcript rule set, in required order.
pub fn default_rules() -> Result<Vec<ReplacementRule>, regex::Error> {
    Ok(vec![
        // 1. version marker followed by 2+ newlines
        ReplacementRule::replace("version_gap", r"V\d+, \d+\n{2,}", "")?,
        // 2. HH;MM;SS;FF -> MMSS
        ReplacementRule::replace("time_code", r"(\d{2});(\d{2});(\d{2});(\d{2})", "${2}${3}")?,
        // 3. leading N marker before a newline-terminated line
        ReplacementRule::strip_before("leading_n", r"(?m)^[NＮ](?P<run>[\s\u{3000}]+)", r".+\n")?,
        // 4. leading whitespace when the following line is indented or blank
        ReplacementRule::strip_before(
            "indent_before_indented",
            r"(?m)^(?P<run>\s+)",
            r".+\n[\s\u{3000}]",
        )?,
        // 5. leading whitespace before a lone token ending its line
        ReplacementRule::strip_before(
            "indent_before_word",
            r"(?m)^(?P<run>[\s\u{3000}]+)",
            r"\S+\n",
        )?,
        // 6. `A - B` / `Vn, m` / body  ->  `A　　N　　body` + blank + `B　　ON`
        ReplacementRule::replace(
            "record_block",
            r"(\d{4})\s-\s(\d{4})\n(V\d{1,2},\s\d)\n(?:(.+(?:\n.+)*)\n?)?",
            "${1}\u{3000}\u{3000}N\u{3000}\u{3000}${4}\n\n${2}\u{3000}\u{3000}ON\n",
        )?,
        // 7. indent lines without a `dddd N` / `dddd ON` marker
        ReplacementRule::prefix_unmarked(
            "indent_unmarked",
            r"\d{4}[ \u{3000}]*(?:N|ON)",
            BODY_INDENT,
        )?,
    ])
}

pub static DEFAULT_RULES: LazyLock<Vec<ReplacementRule>> =
    LazyLock::new(|| default_rules().unwrap());

/// Run `rules` in order over the whole text.
pub fn rewrite(text: &str, rules: &[ReplacementRule]) -> String {
    rules.iter().fold(text.to_string(), |acc, rule| {
        let out = rule.apply(&acc);
        tracing::debug!(rule = rule.name(), before = acc.len(), after = out.len(), "rule applied");
        out
    })
}
