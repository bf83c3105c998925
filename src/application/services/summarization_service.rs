use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use crate::application::ports::{
    FileLoader, FileLoaderError, LlmClient, LlmClientError, StagingStore, StagingStoreError,
    WebPageError, WebPageLoader,
};
use crate::application::services::StagedUpload;
use crate::domain::{FileType, SummaryRequest, SummaryRole};

pub struct SummarizationService {
    file_loader: Arc<dyn FileLoader>,
    web_page_loader: Arc<dyn WebPageLoader>,
    llm_client: Arc<dyn LlmClient>,
    upload_store: Arc<dyn StagingStore>,
    max_input_chars: usize,
    request_timeout: Option<Duration>,
}

impl SummarizationService {
    pub fn new(
        file_loader: Arc<dyn FileLoader>,
        web_page_loader: Arc<dyn WebPageLoader>,
        llm_client: Arc<dyn LlmClient>,
        upload_store: Arc<dyn StagingStore>,
        max_input_chars: usize,
    ) -> Self {
        Self {
            file_loader,
            web_page_loader,
            llm_client,
            upload_store,
            max_input_chars,
            request_timeout: None,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Fails fast before any staging, parsing or fetching when no
    /// credential is set.
    fn ensure_llm_configured(&self) -> Result<(), SummarizationError> {
        if self.llm_client.is_configured() {
            Ok(())
        } else {
            Err(LlmClientError::NotConfigured.into())
        }
    }

    /// Summarizes `text`, cutting it to the configured character budget.
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn summarize_text(
        &self,
        text: &str,
        role: SummaryRole,
    ) -> Result<String, SummarizationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SummarizationError::EmptyInput);
        }
        self.ensure_llm_configured()?;

        let char_count = text.chars().count();
        if char_count > self.max_input_chars {
            tracing::info!(
                char_count,
                max_input_chars = self.max_input_chars,
                "Truncating summarization input"
            );
        }

        let mut request = SummaryRequest::new(role, text, self.max_input_chars);
        if let Some(timeout) = self.request_timeout {
            request = request.with_timeout(timeout);
        }

        let summary = self.llm_client.complete(&request).await?;
        tracing::info!(summary_chars = summary.chars().count(), "Summary produced");
        Ok(summary)
    }

    /// Stages an uploaded file, extracts its text and summarizes it. The
    /// staged file is removed before returning.
    #[tracing::instrument(skip(self, data), fields(size_bytes = data.len()))]
    pub async fn summarize_upload(
        &self,
        original_name: &str,
        data: Bytes,
    ) -> Result<String, SummarizationError> {
        let file_type = FileType::from_filename(original_name);
        if !file_type.is_supported() {
            return Err(SummarizationError::UnsupportedFileType(
                original_name.to_string(),
            ));
        }
        self.ensure_llm_configured()?;

        let upload =
            StagedUpload::stage(Arc::clone(&self.upload_store), original_name, file_type, data)
                .await?;
        let extracted = self.file_loader.extract_text(&upload.path, file_type).await;
        upload.discard().await;

        let text = extracted?;
        if text.is_empty() {
            return Err(SummarizationError::NoTextFound(original_name.to_string()));
        }

        self.summarize_text(&text, SummaryRole::Document).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn summarize_webpage(&self, url: &str) -> Result<String, SummarizationError> {
        self.ensure_llm_configured()?;
        let text = self.web_page_loader.extract(url).await?;
        if text.is_empty() {
            return Err(SummarizationError::NoWebContent(url.to_string()));
        }

        self.summarize_text(&text, SummaryRole::Webpage).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error("no text provided")]
    EmptyInput,
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("staging: {0}")]
    Staging(#[from] StagingStoreError),
    #[error("extraction: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("no text found in {0}")]
    NoTextFound(String),
    #[error("webpage: {0}")]
    WebPage(#[from] WebPageError),
    #[error("no content found at {0}")]
    NoWebContent(String),
    #[error("llm: {0}")]
    Llm(#[from] LlmClientError),
}
