//! docx-rs backed document sink.

use crate::sink::DocumentSink;
use docx_rs::{
    read_docx, BreakType, DocumentChild, Docx, Paragraph, ParagraphChild, Run, RunChild, RunFonts,
};
use nr_core::error::{NrError, Result};
use nr_core::types::{Span, SpanStyle};
use nr_core::StyleConfig;
use std::io::Cursor;
use std::path::Path;

/// A DOCX document opened from a template.
#[derive(Debug, Clone)]
pub struct DocxDocument {
    docx: Docx,
}

impl DocxDocument {
    pub fn new() -> Self {
        Self { docx: Docx::new() }
    }

    /// Open a template file. Missing, unreadable or corrupt templates
    /// surface as `TemplateUnavailable`.
    pub fn from_template(path: &Path) -> Result<Self> {
        let shown = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|e| NrError::template(&shown, e))?;
        let docx = read_docx(&bytes).map_err(|e| NrError::template(&shown, format!("{e:?}")))?;
        tracing::debug!(
            template = %shown,
            paragraphs = docx.document.children.len(),
            "template opened"
        );
        Ok(Self { docx })
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    /// Text of every paragraph. Breaks read back as `\n`.
    pub fn paragraph_texts(&self) -> Vec<String> {
        self.paragraphs().map(paragraph_text).collect()
    }

    /// Serialized `word/document.xml`.
    pub fn document_xml(&self) -> String {
        String::from_utf8_lossy(&self.docx.clone().build().document).into_owned()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.docx
            .clone()
            .build()
            .pack(&mut cursor)
            .map_err(|e| NrError::SinkWrite(e.to_string()))?;
        Ok(cursor.into_inner())
    }

    fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.docx.document.children.iter().filter_map(|c| match c {
            DocumentChild::Paragraph(p) => Some(&**p),
            _ => None,
        })
    }
}

impl Default for DocxDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Docx> for DocxDocument {
    fn from(docx: Docx) -> Self {
        Self { docx }
    }
}

impl DocumentSink for DocxDocument {
    fn append_paragraph(&mut self, spans: &[Span], style: &StyleConfig) {
        let paragraph = spans
            .iter()
            .fold(Paragraph::new(), |p, span| p.add_run(span_run(span, style)));
        let docx = std::mem::replace(&mut self.docx, Docx::new());
        self.docx = docx.add_paragraph(paragraph);
    }

    fn remove_leading_blank_paragraph(&mut self) -> bool {
        let children = &mut self.docx.document.children;
        let first = children.iter().position(|c| matches!(c, DocumentChild::Paragraph(_)));
        let Some(idx) = first else {
            return false;
        };
        let blank = match &children[idx] {
            DocumentChild::Paragraph(p) => paragraph_text(p).trim().is_empty(),
            _ => false,
        };
        if blank {
            children.remove(idx);
        }
        blank
    }

    fn apply_style(&mut self, style: &StyleConfig) {
        let family = style.font_family.as_str();
        let size = style.half_points();
        for child in self.docx.document.children.iter_mut() {
            let DocumentChild::Paragraph(p) = child else { continue };
            for pc in p.children.iter_mut() {
                if let ParagraphChild::Run(run) = pc {
                    let styled = std::mem::replace(run.as_mut(), Run::new())
                        .fonts(
                            RunFonts::new()
                                .ascii(family)
                                .hi_ansi(family)
                                .east_asia(family)
                                .cs(family),
                        )
                        .size(size);
                    **run = styled;
                }
            }
        }
    }

    /// Packs in memory first so a failed pack leaves no file behind.
    fn persist(self, output: &Path) -> Result<()> {
        let mut cursor = Cursor::new(Vec::new());
        self.docx
            .build()
            .pack(&mut cursor)
            .map_err(|e| NrError::SinkWrite(format!("{}: {e}", output.display())))?;
        std::fs::write(output, cursor.into_inner())
            .map_err(|e| NrError::SinkWrite(format!("{}: {e}", output.display())))?;
        tracing::debug!(output = %output.display(), "document saved");
        Ok(())
    }
}

/// One run per span. Newlines become text-wrapping breaks.
fn span_run(span: &Span, style: &StyleConfig) -> Run {
    let mut run = Run::new();
    for (i, line) in span.text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            run = run.add_text(line);
        }
    }
    match (span.style, style.highlight.ooxml_name()) {
        (SpanStyle::Highlighted, Some(color)) => run.highlight(color),
        _ => run,
    }
}

fn paragraph_text(p: &Paragraph) -> String {
    let mut text = String::new();
    for child in &p.children {
        let ParagraphChild::Run(run) = child else { continue };
        for rc in &run.children {
            match rc {
                RunChild::Text(t) => text.push_str(&t.text),
                RunChild::Break(_) => text.push('\n'),
                RunChild::Tab(_) => text.push('\t'),
                _ => {}
            }
        }
    }
    text
}
