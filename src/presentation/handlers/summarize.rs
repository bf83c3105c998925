use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::domain::{SummaryRole, allowed_file};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Deserialize)]
pub struct SummarizeForm {
    #[serde(default)]
    pub text: Option<String>,
}

struct UploadedFile {
    name: String,
    data: Bytes,
}

#[derive(Default)]
struct SummarizeInput {
    text: Option<String>,
    file: Option<UploadedFile>,
}

/// Summarizes either an uploaded `file` or the `text` field. The file wins
/// when both are sent.
#[tracing::instrument(skip(state, request))]
pub async fn summarize_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<SummaryResponse>, ApiError> {
    let input = read_input(request, &state).await?;

    let summary = if let Some(file) = input.file {
        if !allowed_file(&file.name) {
            return Err(ApiError::bad_request(format!(
                "Unsupported file type: {}. Allowed types are txt, pdf and docx",
                file.name
            )));
        }
        tracing::debug!(filename = %file.name, bytes = file.data.len(), "Summarizing upload");
        state
            .summarization_service
            .summarize_upload(&file.name, file.data)
            .await?
    } else {
        let text = input
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApiError::bad_request("No text or file provided"))?;
        tracing::debug!(text = %sanitize_prompt(&text), "Summarizing text");
        state
            .summarization_service
            .summarize_text(&text, SummaryRole::Document)
            .await?
    };

    Ok(Json(SummaryResponse { summary }))
}

async fn read_input(request: Request, state: &AppState) -> Result<SummarizeInput, ApiError> {
    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"));

    if !is_multipart {
        return match Form::<SummarizeForm>::from_request(request, state).await {
            Ok(Form(form)) => Ok(SummarizeInput {
                text: form.text,
                file: None,
            }),
            // No body or a non-form body carries no input we can read.
            Err(FormRejection::InvalidFormContentType(_)) => Ok(SummarizeInput::default()),
            Err(e) => Err(ApiError::new(e.status(), e.body_text())),
        };
    }

    let mut multipart = Multipart::from_request(request, state)
        .await
        .map_err(|e| ApiError::new(e.status(), e.body_text()))?;

    let mut input = SummarizeInput::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::new(e.status(), e.body_text()))?
    {
        let field_name = field.name().map(str::to_owned);
        match field_name.as_deref() {
            Some("file") => {
                let name = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::new(e.status(), e.body_text()))?;
                // Browsers send an empty part when no file was chosen.
                if !name.is_empty() {
                    input.file = Some(UploadedFile { name, data });
                }
            }
            Some("text") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::new(e.status(), e.body_text()))?;
                input.text = Some(text);
            }
            _ => {}
        }
    }

    Ok(input)
}
