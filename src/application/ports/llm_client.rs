use std::fmt;

use async_trait::async_trait;

use crate::domain::SummaryRequest;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: &SummaryRequest) -> Result<String, LlmClientError>;

    /// False when `complete` would fail with `NotConfigured` without
    /// reaching the provider.
    fn is_configured(&self) -> bool {
        true
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("llm credential is not configured")]
    NotConfigured,
    #[error("provider rejected the request ({kind}, HTTP {status})")]
    Provider { kind: ProviderErrorKind, status: u16 },
    #[error("llm request timed out")]
    Timeout,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Category of an error reported by the LLM provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    Authentication,
    RateLimited,
    InvalidRequest,
    ServerError,
    Other,
}

impl ProviderErrorKind {
    /// Classifies from the provider's `error.type`/`error.code`, falling
    /// back to the HTTP status.
    pub fn classify(status: u16, error_type: Option<&str>) -> Self {
        match error_type {
            Some("invalid_api_key" | "authentication_error" | "permission_error") => {
                return Self::Authentication;
            }
            Some("rate_limit_exceeded" | "insufficient_quota" | "rate_limit_error") => {
                return Self::RateLimited;
            }
            Some("invalid_request_error" | "context_length_exceeded") => {
                return Self::InvalidRequest;
            }
            Some("server_error" | "api_error" | "overloaded_error") => return Self::ServerError,
            _ => {}
        }

        match status {
            401 | 403 => Self::Authentication,
            429 => Self::RateLimited,
            400 | 404 | 413 | 422 => Self::InvalidRequest,
            500..=599 => Self::ServerError,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Authentication => "authentication",
            Self::RateLimited => "rate limited",
            Self::InvalidRequest => "invalid request",
            Self::ServerError => "server error",
            Self::Other => "other",
        };
        f.write_str(label)
    }
}
