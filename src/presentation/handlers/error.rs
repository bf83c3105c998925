use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{
    ConversionError, FileLoaderError, LlmClientError, StagingStoreError, WebPageError,
};
use crate::application::services::{ConversionServiceError, SummarizationError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A failed request: the status to answer with and the message shown to the
/// caller. Internal details are logged, not returned.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = self.status.as_u16(), error = %self.message, "Request failed");
        } else {
            tracing::warn!(status = self.status.as_u16(), error = %self.message, "Request rejected");
        }

        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<LlmClientError> for ApiError {
    fn from(error: LlmClientError) -> Self {
        match error {
            LlmClientError::NotConfigured => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Summarization service is not configured",
            ),
            LlmClientError::Provider { kind, .. } => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Summarization service unavailable ({kind}), please try again later"),
            ),
            LlmClientError::Timeout => Self::new(
                StatusCode::GATEWAY_TIMEOUT,
                "Summarization service timed out",
            ),
            LlmClientError::ApiRequestFailed(e) | LlmClientError::InvalidResponse(e) => {
                tracing::error!(error = %e, "Summarization call failed");
                Self::internal("Unexpected error while summarizing")
            }
        }
    }
}

impl From<WebPageError> for ApiError {
    fn from(error: WebPageError) -> Self {
        let message = match &error {
            WebPageError::InvalidUrl(_) => {
                "Invalid URL, it must start with http:// or https://".to_string()
            }
            WebPageError::Timeout => "Timed out while fetching the webpage".to_string(),
            WebPageError::Network(_) => "Could not connect to the webpage".to_string(),
            WebPageError::HttpStatus(code) => {
                format!("The webpage could not be retrieved (HTTP {code})")
            }
            WebPageError::Parse(_) => "The webpage content could not be read".to_string(),
        };
        tracing::debug!(error = %error, "Webpage extraction failed");
        Self::bad_request(message)
    }
}

impl From<FileLoaderError> for ApiError {
    fn from(error: FileLoaderError) -> Self {
        match error {
            FileLoaderError::UnsupportedFileType(name) => {
                Self::bad_request(format!("Unsupported file type: {name}"))
            }
            FileLoaderError::Io(e) => {
                Self::bad_request(format!("Could not read the uploaded file: {e}"))
            }
            FileLoaderError::ExtractionFailed(e) => {
                Self::bad_request(format!("Could not extract text from the file: {e}"))
            }
        }
    }
}

impl From<StagingStoreError> for ApiError {
    fn from(error: StagingStoreError) -> Self {
        match error {
            StagingStoreError::InvalidName(_) => Self::bad_request("Invalid file name"),
            StagingStoreError::NotFound(_) => Self::not_found("File not found"),
            other => {
                tracing::error!(error = %other, "Storage failure");
                Self::internal("Could not store the uploaded file")
            }
        }
    }
}

impl From<ConversionError> for ApiError {
    fn from(error: ConversionError) -> Self {
        match error {
            ConversionError::PasswordProtected => {
                Self::bad_request("The PDF file may be password protected")
            }
            other => {
                tracing::error!(error = %other, "PDF conversion failed");
                Self::internal("Failed to convert the PDF file")
            }
        }
    }
}

impl From<SummarizationError> for ApiError {
    fn from(error: SummarizationError) -> Self {
        match error {
            SummarizationError::EmptyInput => Self::bad_request("No text provided"),
            SummarizationError::UnsupportedFileType(name) => Self::bad_request(format!(
                "Unsupported file type: {name}. Allowed types are txt, pdf and docx"
            )),
            SummarizationError::Staging(e) => e.into(),
            SummarizationError::Extraction(e) => e.into(),
            SummarizationError::NoTextFound(name) => {
                Self::bad_request(format!("No text could be extracted from {name}"))
            }
            SummarizationError::WebPage(e) => e.into(),
            SummarizationError::NoWebContent(_) => {
                Self::bad_request("No readable content was found on the webpage")
            }
            SummarizationError::Llm(e) => e.into(),
        }
    }
}

impl From<ConversionServiceError> for ApiError {
    fn from(error: ConversionServiceError) -> Self {
        match error {
            ConversionServiceError::NotPdf(name) => {
                Self::bad_request(format!("Only PDF files can be converted: {name}"))
            }
            ConversionServiceError::Staging(e) => e.into(),
            ConversionServiceError::Conversion(e) => e.into(),
        }
    }
}
