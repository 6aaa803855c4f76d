use serde::{Deserialize, Serialize};

/// Rendering style of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanStyle {
    Plain,
    Highlighted,
}

/// Contiguous run of output text with its style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: SpanStyle::Plain }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: SpanStyle::Highlighted }
    }

    pub fn is_highlighted(&self) -> bool {
        self.style == SpanStyle::Highlighted
    }
}

/// Background highlight applied to highlighted spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightStyle {
    #[default]
    Gray50,
    Gray25,
    Yellow,
    BrightGreen,
    None,
}

impl HighlightStyle {
    /// OOXML `w:highlight` value, `None` when no highlight element is written.
    pub fn ooxml_name(&self) -> Option<&'static str> {
        match self {
            Self::Gray50 => Some("darkGray"),
            Self::Gray25 => Some("lightGray"),
            Self::Yellow => Some("yellow"),
            Self::BrightGreen => Some("green"),
            Self::None => None,
        }
    }
}
