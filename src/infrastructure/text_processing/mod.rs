mod composite_file_loader;
mod docx_adapter;
mod pdf_adapter;
mod plain_text_adapter;
mod text_sanitizer;

pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::{DEFAULT_MAX_PARAGRAPHS, DocxAdapter};
pub use pdf_adapter::{DEFAULT_MAX_PAGES, PdfAdapter};
pub use plain_text_adapter::PlainTextAdapter;
pub use text_sanitizer::{collapse_whitespace, sanitize_extracted_text};
