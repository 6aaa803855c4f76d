//! Half-width → full-width folding for `0-9A-Za-z.`.

/// Offset between an ASCII char and its full-width form (U+FF01..U+FF5E).
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Fold one char; anything outside the domain is returned as-is.
pub fn fold_char(c: char) -> char {
    match c {
        '0'..='9' | 'A'..='Z' | 'a'..='z' | '.' => {
            char::from_u32(c as u32 + FULL_WIDTH_OFFSET).unwrap_or(c)
        }
        _ => c,
    }
}

pub fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// True when `fold` would leave the text untouched.
pub fn is_folded(text: &str) -> bool {
    !text.chars().any(|c| fold_char(c) != c)
}
