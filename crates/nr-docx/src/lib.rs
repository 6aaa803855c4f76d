//! Annotated DOCX output for normalized transcripts.
//!
//! `Annotator` runs the normalizer, then renders the spans into any
//! `DocumentSink`. `DocxDocument` is the docx-rs backed sink.

pub mod annotator;
pub mod document;
pub mod sink;

pub use annotator::{AnnotationReport, Annotator};
pub use document::DocxDocument;
pub use sink::DocumentSink;
