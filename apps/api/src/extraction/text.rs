//! Text extraction collaborator: best-effort plain text from uploaded bytes.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>` so tests and future formats
//! can swap the backend without touching the ingest path.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the document text, or empty text for media types the backend
    /// cannot read. Fails only when a supported document is unreadable.
    async fn extract_text(&self, bytes: Bytes, media_type: &str) -> Result<String, AppError>;
}

/// Reads PDFs with `pdf-extract`. Every other media type yields empty text.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, bytes: Bytes, media_type: &str) -> Result<String, AppError> {
        if media_type != PDF_MEDIA_TYPE {
            debug!("No text extraction for media type {media_type}");
            return Ok(String::new());
        }

        let text = parse_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await?;
        debug!("Extracted {} characters of PDF text", text.len());
        Ok(text)
    }
}

/// Runs a CPU-bound parser off the async runtime. A parser error and a parser
/// panic both mean the document is unreadable.
async fn parse_blocking<F, E>(parse: F) -> Result<String, AppError>
where
    F: FnOnce() -> Result<String, E> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    match tokio::task::spawn_blocking(parse).await {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(AppError::Extraction(e.to_string())),
        Err(e) if e.is_panic() => Err(AppError::Extraction(
            "document parser panicked on malformed input".to_string(),
        )),
        Err(e) => Err(AppError::Internal(anyhow::anyhow!(
            "PDF extraction task failed: {e}"
        ))),
    }
}
