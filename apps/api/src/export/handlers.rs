use axum::{
    extract::Json,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::export::{pdf::render_pdf, slug_filename, xlsx::render_xlsx, ExportError};

const PDF_CONTENT_TYPE: &str = "application/pdf";
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub title: String,
    pub data: Value,
}

/// POST /api/v1/export/pdf
pub async fn handle_export_pdf(Json(request): Json<ExportRequest>) -> Result<Response, AppError> {
    validate(&request)?;
    let filename = slug_filename(&request.title, "pdf");
    let bytes = render_blocking(move || render_pdf(&request.title, &request.data)).await?;
    Ok(attachment(PDF_CONTENT_TYPE, &filename, bytes))
}

/// POST /api/v1/export/xlsx
pub async fn handle_export_xlsx(Json(request): Json<ExportRequest>) -> Result<Response, AppError> {
    validate(&request)?;
    let filename = slug_filename(&request.title, "xlsx");
    let bytes = render_blocking(move || render_xlsx(&request.data)).await?;
    Ok(attachment(XLSX_CONTENT_TYPE, &filename, bytes))
}

fn validate(request: &ExportRequest) -> Result<(), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    Ok(())
}

async fn render_blocking<F>(render: F) -> Result<Vec<u8>, AppError>
where
    F: FnOnce() -> Result<Vec<u8>, ExportError> + Send + 'static,
{
    tokio::task::spawn_blocking(render)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("export task failed: {e}")))?
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))
}

fn attachment(content_type: &'static str, filename: &str, bytes: Vec<u8>) -> Response {
    info!("Exporting {filename} ({} bytes)", bytes.len());
    let disposition = format!("attachment; filename=\"{}\"", header_safe(filename));
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response()
}

/// Header values must be visible ASCII; quotes would end the filename parameter.
fn header_safe(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
