use axum::extract::{Path, Query, State};
use axum::http::HeaderValue;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::presentation::handlers::error::ApiError;
use crate::presentation::state::AppState;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Deserialize)]
pub struct DownloadQuery {
    #[serde(default)]
    pub filename_original: Option<String>,
}

#[tracing::instrument(skip(state, query))]
pub async fn download_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, ApiError> {
    let path = state.output_store.resolve(&name).await?;

    let data = tokio::fs::read(&path).await.map_err(|e| {
        tracing::warn!(error = %e, "Converted document vanished before it could be read");
        ApiError::not_found("File not found")
    })?;

    let display_name = query
        .filename_original
        .as_deref()
        .map(display_file_name)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| name.clone());

    tracing::info!(name = %name, display_name = %display_name, bytes = data.len(), "Serving converted document");

    let mut response = data.into_response();
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(DOCX_CONTENT_TYPE));
    let disposition = content_disposition(&display_name);
    match HeaderValue::from_str(&disposition) {
        Ok(value) => {
            headers.insert(CONTENT_DISPOSITION, value);
        }
        Err(_) => {
            headers.insert(CONTENT_DISPOSITION, HeaderValue::from_static("attachment"));
        }
    }

    Ok(response)
}

/// Strips directory components and control characters from a
/// user-supplied display name.
pub fn display_file_name(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    base.chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// `attachment` disposition with an ASCII fallback and an RFC 5987 encoded
/// UTF-8 name.
pub fn content_disposition(display_name: &str) -> String {
    let ascii: String = display_name
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii,
        urlencoding::encode(display_name)
    )
}
