use std::fmt;

use super::document_id::DocumentId;
use super::file_type::FileType;

/// Name under which an upload or a converted document is stored on disk.
///
/// Always `<id>.<extension>`; user-supplied names never reach the
/// filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoredFileName(String);

impl StoredFileName {
    pub fn new(id: &DocumentId, file_type: FileType) -> Option<Self> {
        file_type
            .extension()
            .map(|ext| Self(format!("{}.{}", id, ext)))
    }

    pub fn generate(file_type: FileType) -> Option<Self> {
        Self::new(&DocumentId::new(), file_type)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoredFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bare file name: no separators, no parent references, not hidden.
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains("..")
        && !name.contains(['/', '\\', '\0'])
}
