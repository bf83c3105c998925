use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

use crate::application::ports::{WebPageError, WebPageLoader};

use super::html_content::extract_main_text;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

pub fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

pub struct WebPageAdapter {
    client: Client,
}

impl WebPageAdapter {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, WebPageError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| WebPageError::Network(format!("failed to build http client: {e}")))?;

        Ok(Self { client })
    }
}

fn classify_request_error(error: reqwest::Error) -> WebPageError {
    if error.is_timeout() {
        WebPageError::Timeout
    } else {
        WebPageError::Network(error.to_string())
    }
}

#[async_trait]
impl WebPageLoader for WebPageAdapter {
    #[tracing::instrument(skip(self))]
    async fn extract(&self, url: &str) -> Result<String, WebPageError> {
        if !is_http_url(url) {
            tracing::warn!("Rejected non-http url");
            return Err(WebPageError::InvalidUrl(url.to_string()));
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_request_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Webpage returned an error status");
            return Err(WebPageError::HttpStatus(status.as_u16()));
        }

        // Decodes with the charset from Content-Type, UTF-8 when absent.
        let html = response.text().await.map_err(|e| {
            if e.is_timeout() {
                WebPageError::Timeout
            } else {
                WebPageError::Parse(format!("failed to decode response body: {e}"))
            }
        })?;

        let text = tokio::task::spawn_blocking(move || extract_main_text(&html))
            .await
            .map_err(|e| WebPageError::Parse(format!("html extraction aborted: {e}")))?;

        tracing::info!(chars = text.chars().count(), "Webpage extraction complete");
        Ok(text)
    }
}
