use std::path::{Path, PathBuf};

use async_trait::async_trait;
use docx_rs::{BreakType, Docx, Paragraph, Run};
use pdf_oxide::PdfDocument;

use crate::application::ports::{ConversionError, DocumentConverter};
use crate::domain::{ConversionJob, WriteMode};
use crate::infrastructure::text_processing::collapse_whitespace;

/// Rebuilds a PDF's text as a DOCX document: one DOCX paragraph per text
/// block, a page break between source pages.
#[derive(Default)]
pub struct PdfToDocxConverter;

impl PdfToDocxConverter {
    pub fn new() -> Self {
        Self
    }

    /// Opens `path`, refusing documents that stay locked under the empty
    /// user password. The reader would otherwise yield blank pages for them.
    fn open(path: &Path) -> Result<PdfDocument, ConversionError> {
        let doc = PdfDocument::open(path)
            .map_err(|e| ConversionError::from_reader_message(e.to_string()))?;
        if doc.is_encrypted() && !matches!(doc.authenticate(b""), Ok(true)) {
            return Err(ConversionError::PasswordProtected);
        }
        Ok(doc)
    }

    fn read_page_count(path: &Path) -> Result<usize, ConversionError> {
        let mut doc = Self::open(path)?;
        doc.page_count()
            .map_err(|e| ConversionError::from_reader_message(e.to_string()))
    }

    /// Reads the job's page window. The document handle lives only inside
    /// this call.
    fn read_window(job: &ConversionJob) -> Result<Vec<String>, ConversionError> {
        let mut doc = Self::open(&job.source_pdf)?;
        let page_count = doc
            .page_count()
            .map_err(|e| ConversionError::from_reader_message(e.to_string()))?;

        let mut pages = Vec::new();
        for page_index in job.page_range.clamp(page_count) {
            match doc.extract_text(page_index) {
                Ok(text) => pages.push(text),
                Err(e) => match ConversionError::from_reader_message(e.to_string()) {
                    ConversionError::PasswordProtected => {
                        return Err(ConversionError::PasswordProtected);
                    }
                    other => {
                        tracing::warn!(page_index, error = %other, "Page without extractable text");
                        pages.push(String::new());
                    }
                },
            }
        }
        Ok(pages)
    }

    fn write_window(job: &ConversionJob) -> Result<usize, ConversionError> {
        let pages = Self::read_window(job)?;

        let mut docx = match job.mode {
            WriteMode::Create => Docx::new(),
            WriteMode::Append => {
                let existing = std::fs::read(&job.target_docx)?;
                docx_rs::read_docx(&existing).map_err(|e| {
                    ConversionError::Failed(format!("failed to reopen target document: {e}"))
                })?
            }
        };

        for (index, page) in pages.iter().enumerate() {
            if index > 0 || job.mode == WriteMode::Append {
                docx = docx
                    .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));
            }
            for block in page_blocks(page) {
                docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(block)));
            }
        }

        let file = std::fs::File::create(&job.target_docx)?;
        docx.build()
            .pack(file)
            .map_err(|e| ConversionError::Failed(format!("failed to write DOCX: {e}")))?;

        Ok(pages.len())
    }
}

/// Splits page text into blocks on blank lines, joining the lines of each
/// block.
fn page_blocks(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(collapse_whitespace)
        .filter(|block| !block.is_empty())
        .collect()
}

#[async_trait]
impl DocumentConverter for PdfToDocxConverter {
    async fn page_count(&self, source_pdf: &Path) -> Result<usize, ConversionError> {
        let path: PathBuf = source_pdf.to_path_buf();
        tokio::task::spawn_blocking(move || Self::read_page_count(&path))
            .await
            .map_err(|e| ConversionError::Failed(format!("task join error: {e}")))?
    }

    #[tracing::instrument(
        skip(self, job),
        fields(
            source = %job.source_pdf.display(),
            target = %job.target_docx.display(),
            start = job.page_range.start,
            end = ?job.page_range.end,
        )
    )]
    async fn convert(&self, job: &ConversionJob) -> Result<(), ConversionError> {
        let owned = job.clone();
        let pages = tokio::task::spawn_blocking(move || Self::write_window(&owned))
            .await
            .map_err(|e| ConversionError::Failed(format!("task join error: {e}")))??;

        if !tokio::fs::try_exists(&job.target_docx).await? {
            return Err(ConversionError::OutputMissing(
                job.target_docx.display().to_string(),
            ));
        }

        tracing::debug!(pages, "Page window converted");
        Ok(())
    }
}
