use super::file_type::FileType;
use super::storage_path::StoredFileName;

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub original_name: String,
    pub stored_name: StoredFileName,
    pub file_type: FileType,
    pub size_bytes: u64,
}

impl UploadedDocument {
    pub fn new(
        original_name: String,
        stored_name: StoredFileName,
        file_type: FileType,
        size_bytes: u64,
    ) -> Self {
        Self {
            original_name,
            stored_name,
            file_type,
            size_bytes,
        }
    }
}
