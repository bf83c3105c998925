use synopsis::application::ports::{FileLoader, FileLoaderError};
use synopsis::domain::FileType;
use synopsis::infrastructure::text_processing::PdfAdapter;

use crate::helpers::{page_markers, write_encrypted_pdf, write_pdf};

#[tokio::test]
async fn given_fifteen_page_pdf_when_extracting_then_only_first_ten_pages() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("long.pdf");
    write_pdf(&path, &page_markers(15));

    let text = PdfAdapter::new()
        .extract_text(&path, FileType::Pdf)
        .await
        .unwrap();

    assert!(text.contains("PAGE01"));
    assert!(text.contains("PAGE10"));
    assert!(!text.contains("PAGE11"));
    assert!(!text.contains("PAGE15"));
}

#[tokio::test]
async fn given_custom_page_budget_when_extracting_then_respected() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("short.pdf");
    write_pdf(&path, &page_markers(5));

    let text = PdfAdapter::with_max_pages(2)
        .extract_text(&path, FileType::Pdf)
        .await
        .unwrap();

    assert!(text.contains("PAGE02"));
    assert!(!text.contains("PAGE03"));
}

#[tokio::test]
async fn given_corrupt_pdf_when_extracting_then_extraction_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"not a pdf at all").unwrap();

    let result = PdfAdapter::new().extract_text(&path, FileType::Pdf).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_non_pdf_type_when_extracting_then_unsupported() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "text").unwrap();

    let result = PdfAdapter::new().extract_text(&path, FileType::Text).await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFileType(_))));
}

#[tokio::test]
async fn given_pdf_locked_by_user_password_when_extracting_then_extraction_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("locked.pdf");
    write_encrypted_pdf(&path, &page_markers(2), "secret");

    let result = PdfAdapter::new().extract_text(&path, FileType::Pdf).await;

    match result {
        Err(FileLoaderError::ExtractionFailed(message)) => {
            assert!(message.contains("password protected"));
        }
        other => panic!("expected extraction failure, got {other:?}"),
    }
}
