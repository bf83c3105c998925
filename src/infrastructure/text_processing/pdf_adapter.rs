use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::FileType;

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_PAGES: usize = 10;

pub struct PdfAdapter {
    max_pages: usize,
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    pub fn with_max_pages(max_pages: usize) -> Self {
        Self { max_pages }
    }

    /// Concatenates the text of the leading `max_pages` pages. A page that
    /// fails to yield text contributes nothing.
    fn extract_pages(path: &Path, max_pages: usize) -> Result<String, FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;
        if doc.is_encrypted() && !matches!(doc.authenticate(b""), Ok(true)) {
            return Err(FileLoaderError::ExtractionFailed(
                "the PDF file may be password protected".to_string(),
            ));
        }

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let pages_read = page_count.min(max_pages);
        let mut text = String::new();

        for page_index in 0..pages_read {
            let page_text = doc.extract_text(page_index).unwrap_or_default();
            text.push_str(&page_text);
            text.push('\n');
        }

        tracing::info!(page_count, pages_read, "PDF text extraction complete");
        Ok(text)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn extract_text(
        &self,
        path: &Path,
        file_type: FileType,
    ) -> Result<String, FileLoaderError> {
        if file_type != FileType::Pdf {
            return Err(FileLoaderError::UnsupportedFileType(format!("{file_type:?}")));
        }

        let path: PathBuf = path.to_path_buf();
        let max_pages = self.max_pages;

        let raw = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&path, max_pages)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        Ok(sanitize_extracted_text(&raw))
    }
}
