use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{FeatureExtractor, ProfileFallback, TextExtractor};
use crate::models::resume::{NewResume, ResumeRecord};
use crate::store::{DocumentStore, FileStore};

const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// One multipart résumé upload, already pulled off the wire.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Collaborators the ingest path calls out to.
pub struct IngestDeps<'a> {
    pub store: &'a dyn DocumentStore,
    pub files: &'a dyn FileStore,
    pub text_extractor: &'a dyn TextExtractor,
    pub extractor: &'a FeatureExtractor,
}

/// Only PDF, DOC and DOCX files are accepted: the extension must be one of
/// those and the declared media type must mention `pdf` or `doc`.
pub fn check_file_type(file_name: &str, content_type: &str) -> Result<(), AppError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    let media_type = content_type.to_lowercase();

    let extension_ok = ACCEPTED_EXTENSIONS.contains(&extension.as_str());
    let media_type_ok = media_type.contains("pdf") || media_type.contains("doc");
    if extension_ok && media_type_ok {
        Ok(())
    } else {
        Err(AppError::validation(
            "resume",
            "Only PDF, DOC, or DOCX files are allowed",
        ))
    }
}

/// Object key for a stored upload: `resumes/<uuid>-<file name>` with anything
/// outside `[A-Za-z0-9._-]` replaced by `_`.
pub fn object_key(id: Uuid, file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("resumes/{id}-{safe}")
}

/// Full ingestion: gate the file type, extract text, store the binary,
/// extract the profile and persist the record.
pub async fn ingest_resume(
    deps: IngestDeps<'_>,
    upload: ResumeUpload,
) -> Result<ResumeRecord, AppError> {
    check_file_type(&upload.file_name, &upload.content_type)?;

    let parsed_text = deps
        .text_extractor
        .extract_text(upload.bytes.clone(), &upload.content_type)
        .await?;
    if parsed_text.is_empty() {
        info!(
            "No text extracted from {} ({}); relying on submitted fields",
            upload.file_name, upload.content_type
        );
    }

    let key = object_key(Uuid::new_v4(), &upload.file_name);
    deps.files
        .put(&key, upload.bytes, &upload.content_type)
        .await?;

    let fallback = ProfileFallback {
        email: upload.email,
        phone: upload.phone,
    };
    let profile = deps.extractor.extract(&parsed_text, &fallback);
    info!(
        "Extracted profile for {}: {} skills, email {}, phone {}",
        upload.file_name,
        profile.skills.len(),
        if profile.email.is_empty() { "missing" } else { "found" },
        if profile.phone.is_empty() { "missing" } else { "found" },
    );

    let resume = NewResume::from_profile(upload.name, profile, key.clone(), parsed_text);
    match deps.store.insert_resume(resume).await {
        Ok(record) => Ok(record),
        Err(e) => {
            discard_file(deps.files, &key).await;
            Err(e)
        }
    }
}

/// Deletes the résumé record, then its stored file. `Ok(false)` when the
/// résumé does not exist.
pub async fn remove_resume(
    store: &dyn DocumentStore,
    files: &dyn FileStore,
    id: Uuid,
) -> Result<bool, AppError> {
    let Some(record) = store.get_resume(id).await? else {
        return Ok(false);
    };
    if !store.delete_resume(id).await? {
        return Ok(false);
    }
    discard_file(files, &record.resume_file).await;
    info!("Deleted resume {id}");
    Ok(true)
}

/// Best-effort object removal; a leftover file is logged, never surfaced.
async fn discard_file(files: &dyn FileStore, key: &str) {
    if let Err(e) = files.delete(key).await {
        warn!("Could not remove stored file {key}: {e}");
    }
}
