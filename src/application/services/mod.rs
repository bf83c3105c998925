mod conversion_service;
mod staged_upload;
mod summarization_service;

pub use conversion_service::{ConversionService, ConversionServiceError, ConvertedDocument};
pub use staged_upload::StagedUpload;
pub use summarization_service::{SummarizationError, SummarizationService};
