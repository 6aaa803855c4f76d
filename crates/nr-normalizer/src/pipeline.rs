//! Normalizer pipeline — runs the four text stages in their fixed order.

use crate::rewrite::{ReplacementRule, DEFAULT_RULES};
use crate::{blank, dedup, fold, highlight};
use nr_core::types::Span;

/// A text stage. `Stage::ORDER` is the only order stages ever run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Rewrite,
    Suppress,
    Collapse,
    Fold,
}

impl Stage {
    pub const ORDER: [Stage; 4] = [Stage::Rewrite, Stage::Suppress, Stage::Collapse, Stage::Fold];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rewrite => "rewrite",
            Self::Suppress => "suppress",
            Self::Collapse => "collapse",
            Self::Fold => "fold",
        }
    }
}

/// Normalized text with statistics.
#[derive(Debug, Clone)]
pub struct NormalizeResult {
    pub output: String,
    pub original_len: usize,
    pub normalized_len: usize,
    pub stages_applied: Vec<Stage>,
    /// Repeated tokens whose first line was dropped, in document order.
    pub suppressed_tokens: Vec<String>,
}

impl NormalizeResult {
    pub fn removed_lines(&self) -> usize {
        self.suppressed_tokens.len()
    }
}

/// Normalized text split into spans, ready for a document sink.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub normalized: NormalizeResult,
    pub spans: Vec<Span>,
}

impl Annotation {
    pub fn text(&self) -> &str {
        &self.normalized.output
    }

    pub fn highlighted_count(&self) -> usize {
        self.spans.iter().filter(|s| s.is_highlighted()).count()
    }
}

/// The normalizer pipeline.
#[derive(Debug, Clone, Copy)]
pub struct NormalizerPipeline<'r> {
    rules: &'r [ReplacementRule],
}

impl NormalizerPipeline<'static> {
    pub fn new() -> Self {
        Self { rules: DEFAULT_RULES.as_slice() }
    }
}

impl<'r> NormalizerPipeline<'r> {
    pub fn with_rules(rules: &'r [ReplacementRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'r [ReplacementRule] {
        self.rules
    }

    /// Run a single stage over `text`.
    pub fn run_stage(&self, stage: Stage, text: &str) -> String {
        match stage {
            Stage::Rewrite => crate::rewrite::rewrite(text, self.rules),
            Stage::Suppress => dedup::suppress(text),
            Stage::Collapse => blank::collapse(text),
            Stage::Fold => fold::fold(text),
        }
    }

    /// Normalize raw transcript text.
    pub fn run(&self, raw: &str) -> NormalizeResult {
        let mut text = blank::normalize_line_endings(raw);
        let mut stages = Vec::with_capacity(Stage::ORDER.len());
        let mut suppressed = Vec::new();

        for stage in Stage::ORDER {
            text = match stage {
                Stage::Suppress => {
                    let (kept, tokens) = dedup::suppress_with_report(&text);
                    suppressed = tokens;
                    kept
                }
                other => self.run_stage(other, &text),
            };
            tracing::debug!(stage = stage.name(), len = text.len(), "stage applied");
            stages.push(stage);
        }

        NormalizeResult {
            original_len: raw.len(),
            normalized_len: text.len(),
            output: text,
            stages_applied: stages,
            suppressed_tokens: suppressed,
        }
    }

    /// Normalize, then split the folded text into spans.
    pub fn annotate(&self, raw: &str) -> Annotation {
        let normalized = self.run(raw);
        let spans = highlight::split_spans(&normalized.output);
        Annotation { normalized, spans }
    }
}

impl Default for NormalizerPipeline<'static> {
    fn default() -> Self {
        Self::new()
    }
}
