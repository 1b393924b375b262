//! Text extraction adapter: turns an uploaded file into plain text plus minimal metadata.
//!
//! Dispatch is by declared MIME type only. Anything outside PDF, DOCX, JPEG and PNG is
//! rejected before any extractor runs.

use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub mod docx;
pub mod ocr;
pub mod pdf;

use ocr::{OcrEngine, OcrError};

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_JPEG: &str = "image/jpeg";
pub const MIME_PNG: &str = "image/png";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("OCR failed: {0}")]
    Ocr(#[from] OcrError),
}

/// Which extractor handles a given upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Image,
}

impl FileKind {
    pub fn from_mime(mime: &str) -> Result<Self, ExtractError> {
        match mime {
            MIME_PDF => Ok(FileKind::Pdf),
            MIME_DOCX => Ok(FileKind::Docx),
            MIME_JPEG | MIME_PNG => Ok(FileKind::Image),
            other => Err(ExtractError::UnsupportedFileType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
}

/// Raw text of one upload. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub text: String,
    pub metadata: DocumentMetadata,
}

/// Routes uploads to the PDF, DOCX or OCR extractor.
#[derive(Clone)]
pub struct DocumentParser {
    ocr: Arc<dyn OcrEngine>,
}

impl DocumentParser {
    pub fn new(ocr: Arc<dyn OcrEngine>) -> Self {
        Self { ocr }
    }

    pub async fn parse(&self, bytes: Bytes, mime: &str) -> Result<ParsedDocument, ExtractError> {
        let kind = FileKind::from_mime(mime)?;
        info!("Extracting text from {} byte {:?} upload", bytes.len(), kind);

        match kind {
            FileKind::Pdf => run_blocking(move || pdf::parse_pdf(&bytes), ExtractError::Pdf).await,
            FileKind::Docx => {
                run_blocking(move || docx::parse_docx(&bytes), ExtractError::Docx).await
            }
            FileKind::Image => {
                let text = ocr::recognize_image(self.ocr.as_ref(), &bytes, mime).await?;
                Ok(ParsedDocument {
                    text,
                    metadata: DocumentMetadata {
                        file_type: mime.to_string(),
                        ..Default::default()
                    },
                })
            }
        }
    }
}

/// Runs a CPU-bound extractor off the async runtime. Panics inside the
/// extractor surface as errors of the given kind.
async fn run_blocking<F>(
    extract: F,
    on_panic: fn(String) -> ExtractError,
) -> Result<ParsedDocument, ExtractError>
where
    F: FnOnce() -> Result<ParsedDocument, ExtractError> + Send + 'static,
{
    tokio::task::spawn_blocking(extract)
        .await
        .map_err(|e| on_panic(format!("extractor task failed: {e}")))?
}
