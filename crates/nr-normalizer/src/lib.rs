//! Narration normalizer — transcript text passes and record highlighting.
//!
//! Stages, always in this order:
//! 1. Rewrite — seven ordered multiline regex rules
//! 2. Suppress — drop the first line of each repeated 4-digit token
//! 3. Collapse — squeeze runs of blank lines
//! 4. Fold — half-width digits/Latin/period to full-width
//!
//! The folded text is then split into plain and highlighted spans.

pub mod blank;
pub mod dedup;
pub mod fold;
pub mod highlight;
pub mod pipeline;
pub mod rewrite;

pub use pipeline::{Annotation, NormalizeResult, NormalizerPipeline, Stage};
pub use rewrite::{ReplacementRule, DEFAULT_RULES};

#[cfg(test)]
mod tests;
