use std::sync::Arc;

use crate::extraction::{FeatureExtractor, TextExtractor};
use crate::store::{DocumentStore, FileStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Job and résumé records. Default: PgStore.
    pub store: Arc<dyn DocumentStore>,
    /// Uploaded résumé binaries. Default: S3FileStore.
    pub files: Arc<dyn FileStore>,
    /// Document-to-text collaborator. Default: PdfTextExtractor.
    pub text_extractor: Arc<dyn TextExtractor>,
    /// Built once from the configured skill vocabulary.
    pub extractor: Arc<FeatureExtractor>,
}
