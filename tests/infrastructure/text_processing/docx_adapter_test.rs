use synopsis::application::ports::{FileLoader, FileLoaderError};
use synopsis::domain::FileType;
use synopsis::infrastructure::text_processing::DocxAdapter;

use crate::helpers::write_docx;

fn paragraphs(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Paragraph{i:02}")).collect()
}

#[tokio::test]
async fn given_fifteen_paragraphs_when_extracting_then_only_first_ten() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("report.docx");
    write_docx(&path, &paragraphs(15));

    let text = DocxAdapter::new()
        .extract_text(&path, FileType::Docx)
        .await
        .unwrap();

    assert!(text.starts_with("Paragraph01"));
    assert!(text.contains("Paragraph10"));
    assert!(!text.contains("Paragraph11"));
}

#[tokio::test]
async fn given_paragraphs_when_extracting_then_joined_by_single_spaces() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("short.docx");
    write_docx(&path, &["First line.".to_string(), "Second line.".to_string()]);

    let text = DocxAdapter::new()
        .extract_text(&path, FileType::Docx)
        .await
        .unwrap();

    assert_eq!(text, "First line. Second line.");
}

#[tokio::test]
async fn given_corrupt_docx_when_extracting_then_extraction_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.docx");
    std::fs::write(&path, b"PK not really a zip").unwrap();

    let result = DocxAdapter::new().extract_text(&path, FileType::Docx).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}
