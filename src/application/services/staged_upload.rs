use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::{FileType, StoredFileName, UploadedDocument};

/// An upload persisted under a generated name for the duration of one
/// request.
///
/// Call [`StagedUpload::discard`] once the file is no longer needed. If the
/// value is dropped first (early return, panic), the file is deleted in the
/// background instead.
pub struct StagedUpload {
    pub document: UploadedDocument,
    pub path: PathBuf,
    store: Arc<dyn StagingStore>,
    released: bool,
}

impl StagedUpload {
    pub async fn stage(
        store: Arc<dyn StagingStore>,
        original_name: &str,
        file_type: FileType,
        data: Bytes,
    ) -> Result<Self, StagingStoreError> {
        let stored_name = StoredFileName::generate(file_type)
            .ok_or_else(|| StagingStoreError::InvalidName(original_name.to_string()))?;
        let size_bytes = data.len() as u64;
        let path = store.store(&stored_name, data).await?;

        tracing::debug!(
            original_name,
            stored_name = %stored_name,
            size_bytes,
            "Upload staged"
        );

        Ok(Self {
            document: UploadedDocument::new(
                original_name.to_string(),
                stored_name,
                file_type,
                size_bytes,
            ),
            path,
            store,
            released: false,
        })
    }

    pub async fn discard(mut self) {
        self.released = true;
        if let Err(e) = self.store.delete(&self.document.stored_name).await {
            tracing::warn!(
                error = %e,
                stored_name = %self.document.stored_name,
                "Failed to delete staged upload"
            );
        }
    }
}

impl Drop for StagedUpload {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        let store = Arc::clone(&self.store);
        let name = self.document.stored_name.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = store.delete(&name).await {
                        tracing::warn!(error = %e, stored_name = %name, "Failed to delete staged upload");
                    }
                });
            }
            Err(_) => {
                tracing::warn!(stored_name = %name, "No runtime available, staged upload left on disk");
            }
        }
    }
}
