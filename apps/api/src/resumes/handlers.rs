//! Axum route handlers for the Resumes API.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::resumes::ingest::{ingest_resume, remove_resume, IngestDeps, ResumeUpload};
use crate::routes::parse_id;
use crate::search::search_resumes;
use crate::state::AppState;

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge("Uploaded file exceeds the size limit".to_string());
    }
    AppError::validation("resume", format!("Malformed multipart body: {e}"))
}

/// POST /api/resumes/upload
///
/// Multipart form: `resume` (file) plus optional `name`, `email`, `phone`.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ResumeRecord>), AppError> {
    let mut file: Option<(String, String, Bytes)> = None;
    let mut name = None;
    let mut email = None;
    let mut phone = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some((file_name, content_type, bytes));
            }
            "name" => name = Some(field.text().await.map_err(multipart_error)?),
            "email" => email = Some(field.text().await.map_err(multipart_error)?),
            "phone" => phone = Some(field.text().await.map_err(multipart_error)?),
            _ => {}
        }
    }

    let (file_name, content_type, bytes) =
        file.ok_or_else(|| AppError::validation("resume", "No file uploaded"))?;

    let deps = IngestDeps {
        store: state.store.as_ref(),
        files: state.files.as_ref(),
        text_extractor: state.text_extractor.as_ref(),
        extractor: state.extractor.as_ref(),
    };
    let upload = ResumeUpload {
        file_name,
        content_type,
        bytes,
        name,
        email,
        phone,
    };
    let record = ingest_resume(deps, upload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeRecord>>, AppError> {
    Ok(Json(state.store.list_resumes().await?))
}

/// GET /api/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeRecord>, AppError> {
    let id = parse_id(&id, "Resume")?;
    let resume = state
        .store
        .get_resume(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(resume))
}

/// DELETE /api/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id, "Resume")?;
    if !remove_resume(state.store.as_ref(), state.files.as_ref(), id).await? {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }
    Ok(Json(json!({ "message": "Resume deleted successfully" })))
}

/// GET /api/resumes/search/:query
pub async fn handle_search_resumes(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<ResumeRecord>>, AppError> {
    Ok(Json(search_resumes(state.store.as_ref(), &query).await?))
}
