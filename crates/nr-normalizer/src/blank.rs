//! Blank-line collapsing.

/// Keep at most one blank line in a row. Whitespace-only lines count as blank.
pub fn collapse(text: &str) -> String {
    let mut lines = Vec::new();
    let mut prev_blank = false;
    for line in text.split('\n') {
        if !line.trim().is_empty() {
            lines.push(line);
            prev_blank = false;
        } else if !prev_blank {
            lines.push(line);
            prev_blank = true;
        }
    }
    lines.join("\n")
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
