//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobUpdate, NewJob};
use crate::routes::parse_id;
use crate::search::{filter_jobs, search_jobs, JobFilterParams};
use crate::state::AppState;

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<NewJob>,
) -> Result<(StatusCode, Json<JobPosting>), AppError> {
    request.validate()?;
    let job = state.store.insert_job(request).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    Ok(Json(state.store.list_jobs().await?))
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobPosting>, AppError> {
    let id = parse_id(&id, "Job")?;
    let job = state
        .store
        .get_job(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job))
}

/// PUT /api/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<JobUpdate>,
) -> Result<Json<JobPosting>, AppError> {
    let id = parse_id(&id, "Job")?;
    update.validate()?;
    let job = state
        .store
        .update_job(id, update)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job))
}

/// DELETE /api/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id, "Job")?;
    if !state.store.delete_job(id).await? {
        return Err(AppError::NotFound(format!("Job {id} not found")));
    }
    Ok(Json(json!({ "message": "Job deleted successfully" })))
}

/// GET /api/jobs/search/:query
///
/// Jobs sharing at least one token with the query, most relevant first.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    Ok(Json(search_jobs(state.store.as_ref(), &query).await?))
}

/// GET /api/jobs/advanced-search
///
/// AND of the supplied field predicates, newest first.
pub async fn handle_advanced_search(
    State(state): State<AppState>,
    Query(params): Query<JobFilterParams>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    Ok(Json(filter_jobs(state.store.as_ref(), params).await?))
}
