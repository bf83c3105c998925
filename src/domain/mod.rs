mod conversion_job;
mod document;
mod document_id;
mod file_type;
mod storage_path;
mod summary;

pub use conversion_job::{ConversionJob, PageRange, WriteMode};
pub use document::UploadedDocument;
pub use document_id::DocumentId;
pub use file_type::{FileType, allowed_file};
pub use storage_path::{StoredFileName, is_safe_file_name};
pub use summary::{SummaryRequest, SummaryRole, truncate_chars};
