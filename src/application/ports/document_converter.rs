use std::path::Path;

use async_trait::async_trait;

use crate::domain::ConversionJob;

/// Rewrites a PDF (or a page window of it) as a DOCX document.
#[async_trait]
pub trait DocumentConverter: Send + Sync {
    async fn page_count(&self, source_pdf: &Path) -> Result<usize, ConversionError>;

    async fn convert(&self, job: &ConversionJob) -> Result<(), ConversionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("the PDF file may be password protected")]
    PasswordProtected,
    #[error("conversion failed: {0}")]
    Failed(String),
    #[error("converted document was not written: {0}")]
    OutputMissing(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConversionError {
    /// Maps an error reported by the PDF reader, recognising encrypted
    /// sources by their error text.
    pub fn from_reader_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_lowercase();
        if lowered.contains("password") || lowered.contains("encrypt") {
            Self::PasswordProtected
        } else {
            Self::Failed(message)
        }
    }
}
