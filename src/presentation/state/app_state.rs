use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    DocumentConverter, FileLoader, LlmClient, StagingStore, StagingStoreError, WebPageError,
    WebPageLoader,
};
use crate::application::services::{ConversionService, SummarizationService};
use crate::infrastructure::conversion::PdfToDocxConverter;
use crate::infrastructure::llm::OpenAiClient;
use crate::infrastructure::storage::LocalStagingStore;
use crate::infrastructure::text_processing::CompositeFileLoader;
use crate::infrastructure::web::WebPageAdapter;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub summarization_service: Arc<SummarizationService>,
    pub conversion_service: Arc<ConversionService>,
    /// Converted documents, served by the download endpoint.
    pub output_store: Arc<dyn StagingStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("storage: {0}")]
    Storage(#[from] StagingStoreError),
    #[error("http client: {0}")]
    HttpClient(#[from] WebPageError),
}

impl AppState {
    /// Wires the production adapters described by `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, StateError> {
        let upload_store: Arc<dyn StagingStore> =
            Arc::new(LocalStagingStore::new(settings.storage.upload_dir.clone())?);
        let output_store: Arc<dyn StagingStore> =
            Arc::new(LocalStagingStore::new(settings.storage.output_dir.clone())?);

        let file_loader: Arc<dyn FileLoader> = Arc::new(CompositeFileLoader::standard(
            settings.extraction.pdf_max_pages,
            settings.extraction.docx_max_paragraphs,
        ));
        let web_page_loader: Arc<dyn WebPageLoader> = Arc::new(WebPageAdapter::new(
            Duration::from_secs(settings.webpage.timeout_secs),
            &settings.webpage.user_agent,
        )?);
        let llm_client: Arc<dyn LlmClient> = Arc::new(OpenAiClient::from_settings(&settings.llm));
        let converter: Arc<dyn DocumentConverter> = Arc::new(PdfToDocxConverter::new());

        if settings.llm.api_key.is_none() {
            tracing::warn!("No LLM API key configured, summarization will answer 503");
        }

        let summarization_service = SummarizationService::new(
            file_loader,
            web_page_loader,
            llm_client,
            Arc::clone(&upload_store),
            settings.llm.max_input_chars,
        )
        .with_request_timeout(Duration::from_secs(settings.llm.timeout_secs));

        let conversion_service =
            ConversionService::new(converter, upload_store, Arc::clone(&output_store))
                .with_max_pages(settings.conversion.max_pages)
                .with_chunk_pages(settings.conversion.chunk_pages);

        Ok(Self {
            summarization_service: Arc::new(summarization_service),
            conversion_service: Arc::new(conversion_service),
            output_store,
        })
    }
}
