use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::FileType;

use super::text_sanitizer::sanitize_extracted_text;

pub struct PlainTextAdapter;

impl PlainTextAdapter {
    /// Decodes as UTF-8, falling back to ISO-8859-1 which maps every byte to
    /// the code point of the same value.
    pub fn decode(data: Vec<u8>) -> String {
        match String::from_utf8(data) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(error = %e, "Not valid UTF-8, decoding as Latin-1");
                e.into_bytes().iter().map(|&b| char::from(b)).collect()
            }
        }
    }
}

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        path: &Path,
        file_type: FileType,
    ) -> Result<String, FileLoaderError> {
        if file_type != FileType::Text {
            return Err(FileLoaderError::UnsupportedFileType(format!("{file_type:?}")));
        }

        let data = tokio::fs::read(path).await?;
        Ok(sanitize_extracted_text(&Self::decode(data)))
    }
}
