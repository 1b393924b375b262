//! OCR for image uploads.
//!
//! The recognition engine only ever sees a path to a transient temp file. The file is
//! removed when `recognize_image` returns, whether recognition succeeded or not.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

use super::MIME_PNG;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("recognition failed: {0}")]
    Recognition(String),
}

/// A language-initialized text recognition engine.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    fn language(&self) -> &str;

    async fn recognize(&self, image: &Path) -> Result<String, OcrError>;
}

/// Runs the `tesseract` CLI: `tesseract <image> stdout -l <lang>`.
pub struct TesseractOcr {
    binary: String,
    language: String,
}

impl TesseractOcr {
    pub fn new(binary: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    fn language(&self) -> &str {
        &self.language
    }

    async fn recognize(&self, image: &Path) -> Result<String, OcrError> {
        let output = Command::new(&self.binary)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            return Err(OcrError::Recognition(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Writes `bytes` to a temp file, recognizes it, and removes the file on every path.
pub async fn recognize_image(
    engine: &dyn OcrEngine,
    bytes: &[u8],
    mime: &str,
) -> Result<String, OcrError> {
    let suffix = if mime == MIME_PNG { ".png" } else { ".jpg" };
    let image = tempfile::Builder::new()
        .prefix("careerscope-ocr-")
        .suffix(suffix)
        .tempfile()?;
    tokio::fs::write(image.path(), bytes).await?;

    debug!(
        "Running OCR ({}) on {}",
        engine.language(),
        image.path().display()
    );
    let outcome = engine.recognize(image.path()).await;

    if let Err(e) = image.close() {
        warn!("Failed to remove OCR temp file: {e}");
    }

    outcome
}
