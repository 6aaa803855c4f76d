//! Record-end highlighting over folded text.

use nr_core::types::Span;
use regex::Regex;
use std::sync::LazyLock;

/// Four full-width digits, two ideographic spaces, full-width `ＯＮ`.
static RE_RECORD_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[０-９]{4}\u{3000}\u{3000}ＯＮ").unwrap());

/// Split text into plain and highlighted spans. Empty spans are skipped.
pub fn split_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;
    for m in RE_RECORD_END.find_iter(text) {
        if m.start() > last {
            spans.push(Span::plain(&text[last..m.start()]));
        }
        spans.push(Span::highlighted(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        spans.push(Span::plain(&text[last..]));
    }
    spans
}

pub fn count_record_ends(text: &str) -> usize {
    RE_RECORD_END.find_iter(text).count()
}
