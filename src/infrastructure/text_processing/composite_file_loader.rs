use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::FileType;

use super::{DocxAdapter, PdfAdapter, PlainTextAdapter};

/// Routes each file type to the adapter registered for it.
pub struct CompositeFileLoader {
    adapters: HashMap<FileType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(FileType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// Text, PDF and DOCX adapters with the given page/paragraph budgets.
    pub fn standard(pdf_max_pages: usize, docx_max_paragraphs: usize) -> Self {
        let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        let pdf_adapter: Arc<dyn FileLoader> = Arc::new(PdfAdapter::with_max_pages(pdf_max_pages));
        let docx_adapter: Arc<dyn FileLoader> =
            Arc::new(DocxAdapter::with_max_paragraphs(docx_max_paragraphs));

        Self::new(vec![
            (FileType::Text, text_adapter),
            (FileType::Pdf, pdf_adapter),
            (FileType::Docx, docx_adapter),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        path: &Path,
        file_type: FileType,
    ) -> Result<String, FileLoaderError> {
        let adapter = self
            .adapters
            .get(&file_type)
            .ok_or_else(|| FileLoaderError::UnsupportedFileType(format!("{file_type:?}")))?;

        adapter.extract_text(path, file_type).await
    }
}
