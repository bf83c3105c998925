use std::path::Path;

use async_trait::async_trait;

use crate::domain::FileType;

/// Reads a stored upload and returns its whitespace-normalized text.
///
/// `Ok(String::new())` means the file was readable but held no text; every
/// failure to read it is an `Err`.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        path: &Path,
        file_type: FileType,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
