use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    ConversionError, DocumentConverter, StagingStore, StagingStoreError,
};
use crate::application::services::StagedUpload;
use crate::domain::{ConversionJob, FileType, PageRange, StoredFileName, WriteMode};

/// A DOCX written to the output store, ready for download.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedDocument {
    pub stored_name: StoredFileName,
    pub original_name: String,
    pub page_count: usize,
    pub pages_converted: usize,
}

pub struct ConversionService {
    converter: Arc<dyn DocumentConverter>,
    upload_store: Arc<dyn StagingStore>,
    output_store: Arc<dyn StagingStore>,
    max_pages: Option<usize>,
    chunk_pages: Option<usize>,
}

impl ConversionService {
    pub fn new(
        converter: Arc<dyn DocumentConverter>,
        upload_store: Arc<dyn StagingStore>,
        output_store: Arc<dyn StagingStore>,
    ) -> Self {
        Self {
            converter,
            upload_store,
            output_store,
            max_pages: None,
            chunk_pages: None,
        }
    }

    /// Caps how many leading pages of a document are converted.
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages.filter(|&m| m > 0);
        self
    }

    /// Documents longer than `chunk_pages` are converted one window at a
    /// time to bound peak memory.
    pub fn with_chunk_pages(mut self, chunk_pages: Option<usize>) -> Self {
        self.chunk_pages = chunk_pages.filter(|&c| c > 0);
        self
    }

    #[tracing::instrument(skip(self, data), fields(size_bytes = data.len()))]
    pub async fn convert_upload(
        &self,
        original_name: &str,
        data: Bytes,
    ) -> Result<ConvertedDocument, ConversionServiceError> {
        if FileType::from_filename(original_name) != FileType::Pdf {
            return Err(ConversionServiceError::NotPdf(original_name.to_string()));
        }

        let upload = StagedUpload::stage(
            Arc::clone(&self.upload_store),
            original_name,
            FileType::Pdf,
            data,
        )
        .await?;
        let result = self.convert_staged(&upload).await;
        upload.discard().await;

        let converted = result?;
        tracing::info!(
            stored_name = %converted.stored_name,
            page_count = converted.page_count,
            pages_converted = converted.pages_converted,
            "PDF converted to DOCX"
        );
        Ok(converted)
    }

    async fn convert_staged(
        &self,
        upload: &StagedUpload,
    ) -> Result<ConvertedDocument, ConversionServiceError> {
        let page_count = self.converter.page_count(&upload.path).await?;
        let pages_converted = self.max_pages.map_or(page_count, |m| m.min(page_count));
        if pages_converted < page_count {
            tracing::info!(page_count, pages_converted, "Capping conversion page range");
        }

        let stored_name = StoredFileName::generate(FileType::Docx)
            .ok_or_else(|| ConversionError::Failed("no extension for docx".to_string()))?;
        let job = ConversionJob::new(
            upload.path.clone(),
            self.output_store.path_for(&stored_name),
        );

        let outcome = match self.chunk_pages {
            Some(size) if pages_converted > size => {
                self.convert_in_chunks(&job, pages_converted, size).await
            }
            _ => {
                let whole = job.window(PageRange::new(0, Some(pages_converted)), WriteMode::Create);
                self.converter.convert(&whole).await
            }
        };

        if let Err(e) = outcome {
            if let Err(cleanup) = self.output_store.delete(&stored_name).await {
                tracing::debug!(error = %cleanup, "No partial output to remove");
            }
            return Err(e.into());
        }

        Ok(ConvertedDocument {
            stored_name,
            original_name: upload.document.original_name.clone(),
            page_count,
            pages_converted,
        })
    }

    /// Converts `0..page_count` in windows of `chunk_pages`, the first
    /// window creating the target and the rest appending to it.
    pub async fn convert_in_chunks(
        &self,
        job: &ConversionJob,
        page_count: usize,
        chunk_pages: usize,
    ) -> Result<(), ConversionError> {
        for (index, window) in PageRange::windows(page_count, chunk_pages)
            .into_iter()
            .enumerate()
        {
            let mode = if index == 0 {
                WriteMode::Create
            } else {
                WriteMode::Append
            };
            tracing::debug!(start = window.start, end = ?window.end, "Converting page window");
            self.converter.convert(&job.window(window, mode)).await?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionServiceError {
    #[error("not a pdf file: {0}")]
    NotPdf(String),
    #[error("staging: {0}")]
    Staging(#[from] StagingStoreError),
    #[error("conversion: {0}")]
    Conversion(#[from] ConversionError),
}
