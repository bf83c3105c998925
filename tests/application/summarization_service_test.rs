use std::sync::Arc;
use std::sync::atomic::Ordering;

use bytes::Bytes;

use synopsis::application::ports::{LlmClient, LlmClientError, StagingStore, WebPageLoader};
use synopsis::application::services::{SummarizationError, SummarizationService};
use synopsis::domain::SummaryRole;
use synopsis::infrastructure::storage::LocalStagingStore;
use synopsis::infrastructure::text_processing::CompositeFileLoader;

use crate::helpers::{
    CountingFileLoader, CountingWebPageLoader, FailingLlmClient, RecordingLlmClient,
    StubWebPageLoader, UnconfiguredLlmClient, files_in,
};

const MAX_INPUT_CHARS: usize = 4000;

fn create_service(
    llm: Arc<dyn LlmClient>,
    web_text: &str,
) -> (tempfile::TempDir, SummarizationService) {
    let dir = tempfile::TempDir::new().unwrap();
    let store: Arc<dyn StagingStore> =
        Arc::new(LocalStagingStore::new(dir.path().to_path_buf()).unwrap());
    let web: Arc<dyn WebPageLoader> = Arc::new(StubWebPageLoader {
        text: web_text.to_string(),
    });
    let service = SummarizationService::new(
        Arc::new(CompositeFileLoader::standard(10, 10)),
        web,
        llm,
        store,
        MAX_INPUT_CHARS,
    );
    (dir, service)
}

#[tokio::test]
async fn given_text_longer_than_limit_when_summarizing_then_llm_receives_exactly_limit_chars() {
    let llm = RecordingLlmClient::new();
    let (_dir, service) = create_service(llm.clone(), "");
    let text = "a".repeat(5000);

    let summary = service
        .summarize_text(&text, SummaryRole::Document)
        .await
        .unwrap();

    assert_eq!(summary, "A short summary.");
    let requests = llm.recorded();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].source_text.chars().count(), MAX_INPUT_CHARS);
}

#[tokio::test]
async fn given_whitespace_only_text_when_summarizing_then_empty_input_without_llm_call() {
    let llm = RecordingLlmClient::new();
    let (_dir, service) = create_service(llm.clone(), "");

    let result = service.summarize_text("   \n\t ", SummaryRole::Document).await;

    assert!(matches!(result, Err(SummarizationError::EmptyInput)));
    assert!(llm.recorded().is_empty());
}

#[tokio::test]
async fn given_text_upload_when_summarizing_then_extracted_text_sent_and_upload_removed() {
    let llm = RecordingLlmClient::new();
    let (dir, service) = create_service(llm.clone(), "");

    service
        .summarize_upload("notes.txt", Bytes::from_static(b"Hello   upload\nworld"))
        .await
        .unwrap();

    assert_eq!(llm.recorded()[0].source_text, "Hello upload world");
    assert!(files_in(dir.path()).is_empty());
}

#[tokio::test]
async fn given_unsupported_upload_when_summarizing_then_rejected_before_staging() {
    let llm = RecordingLlmClient::new();
    let (dir, service) = create_service(llm.clone(), "");

    let result = service
        .summarize_upload("image.png", Bytes::from_static(b"\x89PNG"))
        .await;

    assert!(matches!(
        result,
        Err(SummarizationError::UnsupportedFileType(_))
    ));
    assert!(files_in(dir.path()).is_empty());
}

#[tokio::test]
async fn given_empty_text_file_when_summarizing_then_no_text_found() {
    let llm = RecordingLlmClient::new();
    let (dir, service) = create_service(llm.clone(), "");

    let result = service
        .summarize_upload("empty.txt", Bytes::from_static(b"  \n "))
        .await;

    assert!(matches!(result, Err(SummarizationError::NoTextFound(_))));
    assert!(llm.recorded().is_empty());
    assert!(files_in(dir.path()).is_empty());
}

#[tokio::test]
async fn given_corrupt_pdf_when_summarizing_then_extraction_error_and_upload_removed() {
    let llm = RecordingLlmClient::new();
    let (dir, service) = create_service(llm.clone(), "");

    let result = service
        .summarize_upload("broken.pdf", Bytes::from_static(b"definitely not a pdf"))
        .await;

    assert!(matches!(result, Err(SummarizationError::Extraction(_))));
    assert!(files_in(dir.path()).is_empty());
}

#[tokio::test]
async fn given_webpage_text_when_summarizing_then_webpage_role_used() {
    let llm = RecordingLlmClient::new();
    let (_dir, service) = create_service(llm.clone(), "Main article text");

    service
        .summarize_webpage("https://example.com/article")
        .await
        .unwrap();

    let requests = llm.recorded();
    assert_eq!(requests[0].source_text, "Main article text");
    assert_eq!(
        requests[0].system_instruction,
        SummaryRole::Webpage.instruction()
    );
}

#[tokio::test]
async fn given_webpage_without_content_when_summarizing_then_no_web_content() {
    let llm = RecordingLlmClient::new();
    let (_dir, service) = create_service(llm.clone(), "");

    let result = service.summarize_webpage("https://example.com").await;

    assert!(matches!(result, Err(SummarizationError::NoWebContent(_))));
    assert!(llm.recorded().is_empty());
}

#[tokio::test]
async fn given_llm_not_configured_when_summarizing_then_error_propagated() {
    let llm: Arc<dyn LlmClient> = Arc::new(FailingLlmClient::new(|| LlmClientError::NotConfigured));
    let (_dir, service) = create_service(llm, "");

    let result = service.summarize_text("some text", SummaryRole::Document).await;

    assert!(matches!(
        result,
        Err(SummarizationError::Llm(LlmClientError::NotConfigured))
    ));
}

#[tokio::test]
async fn given_no_credential_when_summarizing_upload_or_webpage_then_nothing_fetched_or_parsed() {
    let dir = tempfile::TempDir::new().unwrap();
    let store: Arc<dyn StagingStore> =
        Arc::new(LocalStagingStore::new(dir.path().to_path_buf()).unwrap());
    let llm = Arc::new(UnconfiguredLlmClient::default());
    let web = Arc::new(CountingWebPageLoader::default());
    let files = Arc::new(CountingFileLoader::default());
    let service = SummarizationService::new(
        files.clone(),
        web.clone(),
        llm.clone(),
        store,
        MAX_INPUT_CHARS,
    );

    let upload = service
        .summarize_upload("notes.txt", Bytes::from_static(b"some notes"))
        .await;
    let webpage = service.summarize_webpage("https://example.com").await;
    let text = service.summarize_text("some text", SummaryRole::Document).await;

    for result in [upload, webpage, text] {
        assert!(matches!(
            result,
            Err(SummarizationError::Llm(LlmClientError::NotConfigured))
        ));
    }
    assert_eq!(files.extractions.load(Ordering::SeqCst), 0);
    assert_eq!(web.fetches.load(Ordering::SeqCst), 0);
    assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    assert!(files_in(dir.path()).is_empty());
}
