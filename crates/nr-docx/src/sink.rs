use nr_core::error::Result;
use nr_core::types::Span;
use nr_core::StyleConfig;
use std::path::Path;

/// Destination for annotated spans.
pub trait DocumentSink {
    /// Append one paragraph built from `spans`, in order.
    fn append_paragraph(&mut self, spans: &[Span], style: &StyleConfig);

    /// Remove the first paragraph if it is blank. Returns whether it was removed.
    fn remove_leading_blank_paragraph(&mut self) -> bool;

    /// Apply font family and size to every run.
    fn apply_style(&mut self, style: &StyleConfig);

    /// Write the document to `output`.
    fn persist(self, output: &Path) -> Result<()>
    where
        Self: Sized;
}
