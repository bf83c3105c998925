mod document_converter;
mod file_loader;
mod llm_client;
mod staging_store;
mod web_page_loader;

pub use document_converter::{ConversionError, DocumentConverter};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError, ProviderErrorKind};
pub use staging_store::{StagingStore, StagingStoreError};
pub use web_page_loader::{WebPageError, WebPageLoader};
