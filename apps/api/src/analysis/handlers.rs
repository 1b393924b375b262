//! Axum route handlers for document parsing and resume analysis.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::analysis::models::ResumeAnalysis;
use crate::errors::AppError;
use crate::extraction::ParsedDocument;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

/// One uploaded file pulled out of a multipart body.
#[derive(Debug)]
pub struct Upload {
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Reads the `file` field. Other fields are ignored.
pub async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(String::from);
        let content_type = field
            .content_type()
            .map(String::from)
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        return Ok(Upload {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(AppError::Validation(
        "Missing multipart field 'file'".to_string(),
    ))
}

/// POST /api/v1/documents/parse
///
/// Extracts text and metadata from an uploaded PDF, DOCX or image.
pub async fn handle_parse_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ParsedDocument>, AppError> {
    let upload = read_upload(multipart).await?;
    info!(
        "Parsing document {:?} ({})",
        upload.file_name, upload.content_type
    );

    let document = state
        .parser
        .parse(upload.bytes, &upload.content_type)
        .await?;

    Ok(Json(document))
}

/// POST /api/v1/resume/analyze
///
/// Full pipeline: extract → clean → analyses → scores → recommendations.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let upload = read_upload(multipart).await?;
    info!(
        "Analyzing resume {:?} ({}, {} bytes)",
        upload.file_name,
        upload.content_type,
        upload.bytes.len()
    );

    let analysis = state
        .analyzer
        .analyze_upload(upload.bytes, &upload.content_type)
        .await?;

    Ok(Json(analysis))
}
