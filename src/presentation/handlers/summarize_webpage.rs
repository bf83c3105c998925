use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use crate::infrastructure::web::is_http_url;
use crate::presentation::handlers::error::ApiError;
use crate::presentation::handlers::summarize::SummaryResponse;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct WebpageRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[tracing::instrument(skip(state, payload))]
pub async fn summarize_webpage_handler(
    State(state): State<AppState>,
    payload: Result<Json<WebpageRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(request) = payload
        .map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e.body_text())))?;

    let url = request
        .url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::bad_request("No URL provided"))?;

    if !is_http_url(&url) {
        return Err(ApiError::bad_request(
            "Invalid URL, it must start with http:// or https://",
        ));
    }

    tracing::info!(url = %url, "Summarizing webpage");
    let summary = state.summarization_service.summarize_webpage(&url).await?;

    Ok(Json(SummaryResponse { summary }))
}
