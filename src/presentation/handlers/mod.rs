mod convert;
mod download;
mod error;
mod health;
mod summarize;
mod summarize_webpage;

pub use convert::{ConvertResponse, PDF_FIELD, convert_pdf_handler, docx_display_name};
pub use download::{DOCX_CONTENT_TYPE, content_disposition, display_file_name, download_handler};
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use summarize::{SummaryResponse, summarize_handler};
pub use summarize_webpage::summarize_webpage_handler;
