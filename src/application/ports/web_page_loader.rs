use async_trait::async_trait;

/// Fetches a webpage and returns the whitespace-normalized text of its main
/// content region. `Ok(String::new())` is a page without content.
#[async_trait]
pub trait WebPageLoader: Send + Sync {
    async fn extract(&self, url: &str) -> Result<String, WebPageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WebPageError {
    #[error("url must start with http:// or https://: {0}")]
    InvalidUrl(String),
    #[error("timed out fetching the webpage")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("webpage answered with HTTP {0}")]
    HttpStatus(u16),
    #[error("failed to parse the webpage: {0}")]
    Parse(String),
}
