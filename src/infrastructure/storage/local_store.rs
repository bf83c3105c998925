use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use futures::StreamExt;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::{StoredFileName, is_safe_file_name};

/// A flat directory of generated file names, backed by `object_store`.
pub struct LocalStagingStore {
    inner: Arc<LocalFileSystem>,
    root: PathBuf,
}

impl LocalStagingStore {
    pub fn new(base_path: PathBuf) -> Result<Self, StagingStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let root = std::fs::canonicalize(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(&root)
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            root,
        })
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait::async_trait]
impl StagingStore for LocalStagingStore {
    async fn store(
        &self,
        name: &StoredFileName,
        data: Bytes,
    ) -> Result<PathBuf, StagingStoreError> {
        let store_path = StorePath::from(name.as_str());
        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;

        Ok(self.path_for(name))
    }

    fn path_for(&self, name: &StoredFileName) -> PathBuf {
        self.root.join(name.as_str())
    }

    async fn resolve(&self, name: &str) -> Result<PathBuf, StagingStoreError> {
        if !is_safe_file_name(name) {
            return Err(StagingStoreError::InvalidName(name.to_string()));
        }

        let resolved = tokio::fs::canonicalize(self.root.join(name))
            .await
            .map_err(|_| StagingStoreError::NotFound(name.to_string()))?;

        let is_file = tokio::fs::metadata(&resolved)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);

        if !resolved.starts_with(&self.root) || !is_file {
            tracing::warn!(name, "Resolved path escapes the store or is not a file");
            return Err(StagingStoreError::NotFound(name.to_string()));
        }

        Ok(resolved)
    }

    async fn delete(&self, name: &StoredFileName) -> Result<(), StagingStoreError> {
        let store_path = StorePath::from(name.as_str());
        self.inner.delete(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => StagingStoreError::NotFound(name.to_string()),
            other => StagingStoreError::DeleteFailed(other.to_string()),
        })
    }

    async fn purge_older_than(&self, max_age: Duration) -> Result<usize, StagingStoreError> {
        let max_age = chrono::Duration::from_std(max_age)
            .map_err(|e| StagingStoreError::ListFailed(e.to_string()))?;
        let cutoff = chrono::Utc::now() - max_age;

        let mut expired = Vec::new();
        let mut listing = self.inner.list(None);
        while let Some(meta) = listing.next().await {
            let meta = meta.map_err(|e| StagingStoreError::ListFailed(e.to_string()))?;
            if meta.last_modified < cutoff {
                expired.push(meta.location);
            }
        }

        let mut removed = 0;
        for location in expired {
            match self.inner.delete(&location).await {
                Ok(()) => removed += 1,
                Err(e) => tracing::warn!(error = %e, %location, "Failed to purge expired object"),
            }
        }

        Ok(removed)
    }
}
