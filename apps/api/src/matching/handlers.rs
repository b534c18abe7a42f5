use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::matching::{match_resumes_to_job, MatchResult};
use crate::routes::parse_id;
use crate::state::AppState;

/// GET /api/resumes/match/:job_id
///
/// Candidates in relevance order, each with its skill-overlap percentage.
pub async fn handle_match_resumes(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    let job_id = parse_id(&job_id, "Job")?;
    let results = match_resumes_to_job(state.store.as_ref(), job_id).await?;
    Ok(Json(results))
}
