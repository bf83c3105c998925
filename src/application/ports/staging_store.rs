use std::path::PathBuf;
use std::time::Duration;

use bytes::Bytes;

use crate::domain::StoredFileName;

/// Directory-backed store for uploads and converted documents.
#[async_trait::async_trait]
pub trait StagingStore: Send + Sync {
    async fn store(
        &self,
        name: &StoredFileName,
        data: Bytes,
    ) -> Result<PathBuf, StagingStoreError>;

    /// Filesystem path a document named `name` is (or will be) written to.
    fn path_for(&self, name: &StoredFileName) -> PathBuf;

    /// Resolves a caller-supplied name to an existing file inside the store.
    async fn resolve(&self, name: &str) -> Result<PathBuf, StagingStoreError>;

    async fn delete(&self, name: &StoredFileName) -> Result<(), StagingStoreError>;

    /// Deletes every object last modified more than `max_age` ago and
    /// returns how many were removed.
    async fn purge_older_than(&self, max_age: Duration) -> Result<usize, StagingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("unsafe file name: {0}")]
    InvalidName(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("listing failed: {0}")]
    ListFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
