use std::path::Path;

use async_trait::async_trait;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::FileType;

use super::text_sanitizer::sanitize_extracted_text;

/// Paragraph budget for DOCX files. Bounded by paragraphs rather than pages
/// because DOCX carries no page layout.
pub const DEFAULT_MAX_PARAGRAPHS: usize = 10;

pub struct DocxAdapter {
    max_paragraphs: usize,
}

impl Default for DocxAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxAdapter {
    pub fn new() -> Self {
        Self {
            max_paragraphs: DEFAULT_MAX_PARAGRAPHS,
        }
    }

    pub fn with_max_paragraphs(max_paragraphs: usize) -> Self {
        Self { max_paragraphs }
    }

    fn extract_paragraphs(data: &[u8], max_paragraphs: usize) -> Result<String, FileLoaderError> {
        let docx = docx_rs::read_docx(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse DOCX: {e}")))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .take(max_paragraphs)
            .collect();

        tracing::info!(paragraphs = paragraphs.len(), "DOCX text extraction complete");
        Ok(paragraphs.join("\n"))
    }
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push(' '),
                    _ => {}
                }
            }
        }
    }
    text
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn extract_text(
        &self,
        path: &Path,
        file_type: FileType,
    ) -> Result<String, FileLoaderError> {
        if file_type != FileType::Docx {
            return Err(FileLoaderError::UnsupportedFileType(format!("{file_type:?}")));
        }

        let data = tokio::fs::read(path).await?;
        let max_paragraphs = self.max_paragraphs;

        let raw = tokio::task::spawn_blocking(move || {
            Self::extract_paragraphs(&data, max_paragraphs)
        })
        .await
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        Ok(sanitize_extracted_text(&raw))
    }
}
