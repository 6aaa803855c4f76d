//! Annotator — normalize, split spans, render into a sink, persist.

use crate::document::DocxDocument;
use crate::sink::DocumentSink;
use nr_core::error::Result;
use nr_core::StyleConfig;
use nr_normalizer::NormalizerPipeline;
use std::path::Path;

/// Summary of one annotate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationReport {
    pub highlighted_spans: usize,
    pub plain_spans: usize,
    pub suppressed_tokens: Vec<String>,
    pub leading_paragraph_removed: bool,
    pub normalized_len: usize,
}

impl AnnotationReport {
    pub fn removed_lines(&self) -> usize {
        self.suppressed_tokens.len()
    }
}

pub struct Annotator<'r> {
    pipeline: NormalizerPipeline<'r>,
    style: StyleConfig,
}

impl Annotator<'static> {
    pub fn new(style: StyleConfig) -> Self {
        Self { pipeline: NormalizerPipeline::new(), style }
    }
}

impl<'r> Annotator<'r> {
    pub fn with_pipeline(pipeline: NormalizerPipeline<'r>, style: StyleConfig) -> Self {
        Self { pipeline, style }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Normalize `raw` and render it into `sink`: append the span paragraph,
    /// drop a blank leading paragraph, then style every run.
    pub fn annotate_into<S: DocumentSink>(&self, raw: &str, sink: &mut S) -> AnnotationReport {
        let annotation = self.pipeline.annotate(raw);
        sink.append_paragraph(&annotation.spans, &self.style);
        let removed = sink.remove_leading_blank_paragraph();
        sink.apply_style(&self.style);

        let highlighted = annotation.highlighted_count();
        AnnotationReport {
            highlighted_spans: highlighted,
            plain_spans: annotation.spans.len() - highlighted,
            suppressed_tokens: annotation.normalized.suppressed_tokens,
            leading_paragraph_removed: removed,
            normalized_len: annotation.normalized.normalized_len,
        }
    }

    /// Open `template`, annotate `raw` into it and save to `output`.
    /// Nothing is written when the template cannot be opened.
    pub fn annotate(&self, raw: &str, template: &Path, output: &Path) -> Result<AnnotationReport> {
        let result = DocxDocument::from_template(template).and_then(|mut doc| {
            let report = self.annotate_into(raw, &mut doc);
            doc.persist(output)?;
            Ok(report)
        });

        match &result {
            Ok(report) => tracing::info!(
                output = %output.display(),
                highlighted = report.highlighted_spans,
                removed_lines = report.removed_lines(),
                "document annotated"
            ),
            Err(e) => tracing::error!(
                template = %template.display(),
                output = %output.display(),
                error = %e,
                "annotate failed"
            ),
        }
        result
    }
}

impl Default for Annotator<'static> {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}
