use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::domain::FileType;
use crate::presentation::handlers::error::ApiError;
use crate::presentation::state::AppState;

pub const PDF_FIELD: &str = "pdf-file";

#[derive(Serialize)]
pub struct ConvertResponse {
    pub download_url: String,
    pub message: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn convert_pdf_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ConvertResponse>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::new(e.status(), e.body_text()))?
    {
        if field.name() != Some(PDF_FIELD) {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::new(e.status(), e.body_text()))?;
        upload = Some((name, data));
        break;
    }

    let (name, data) = upload
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| ApiError::bad_request("No PDF file uploaded"))?;

    if FileType::from_filename(&name) != FileType::Pdf {
        return Err(ApiError::bad_request(format!(
            "Only PDF files can be converted: {name}"
        )));
    }

    let converted = state.conversion_service.convert_upload(&name, data).await?;

    let download_url = format!(
        "/download/{}?filename_original={}",
        converted.stored_name,
        urlencoding::encode(&docx_display_name(&converted.original_name))
    );

    let message = if converted.pages_converted < converted.page_count {
        format!(
            "PDF converted successfully (first {} of {} pages)",
            converted.pages_converted, converted.page_count
        )
    } else {
        "PDF converted successfully".to_string()
    };

    Ok(Json(ConvertResponse {
        download_url,
        message,
    }))
}

/// `report.pdf` becomes `report.docx`.
pub fn docx_display_name(original_name: &str) -> String {
    let stem = original_name
        .rsplit_once('.')
        .map_or(original_name, |(stem, _)| stem);
    if stem.is_empty() {
        "document.docx".to_string()
    } else {
        format!("{stem}.docx")
    }
}
