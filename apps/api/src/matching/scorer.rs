//! Match Scorer: ranks the résumé pool against one job posting.
//!
//! Algorithm:
//! 1. Query = job title, then its skills, then its requirements, space-joined.
//! 2. The relevance ranker selects and orders candidates with that query.
//! 3. Each candidate gets `matchPercentage` = share of the job's skills found
//!    (exact, case-insensitive token equality) among the candidate's skills.
//! 4. Results keep the relevance order. They are NOT re-sorted by
//!    `matchPercentage`: inclusion and order come from free-text relevance,
//!    the percentage is a separate displayed metric.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::models::resume::ResumeRecord;
use crate::search::ranker::{rank_by_terms, QueryTerms};
use crate::store::DocumentStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub resume: ResumeRecord,
    pub match_percentage: u8,
}

/// Builds the free-text query used to select candidates for `job`.
pub fn build_match_query(job: &JobPosting) -> String {
    std::iter::once(job.title.as_str())
        .chain(job.skills.iter().map(String::as_str))
        .chain(job.requirements.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Percentage (0–100, rounded) of `job_skills` matched by `candidate_skills`.
/// A job without skills always scores 0.
pub fn skill_match_percentage(job_skills: &[String], candidate_skills: &[String]) -> u8 {
    if job_skills.is_empty() {
        return 0;
    }
    let wanted: Vec<String> = job_skills.iter().map(|s| s.to_lowercase()).collect();
    let matched = candidate_skills
        .iter()
        .filter(|skill| wanted.contains(&skill.to_lowercase()))
        .count();

    let percentage = matched as f64 / job_skills.len() as f64 * 100.0;
    percentage.round().min(100.0) as u8
}

/// Scores an already-loaded résumé pool against `job`.
pub fn score_candidates(job: &JobPosting, resumes: Vec<ResumeRecord>) -> Vec<MatchResult> {
    let terms = QueryTerms::from_text(&build_match_query(job));
    debug!("Match query for job {} has {} terms", job.id, terms.len());

    rank_by_terms(&terms, resumes)
        .into_iter()
        .map(|resume| {
            let match_percentage = skill_match_percentage(&job.skills, &resume.skills);
            MatchResult {
                resume,
                match_percentage,
            }
        })
        .collect()
}

/// Resolves `job_id` and scores every stored résumé against it.
pub async fn match_resumes_to_job(
    store: &dyn DocumentStore,
    job_id: Uuid,
) -> Result<Vec<MatchResult>, AppError> {
    let job = store
        .get_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let resumes = store.list_resumes().await?;
    let pool_size = resumes.len();
    let results = score_candidates(&job, resumes);

    info!(
        "Matched {} of {pool_size} resumes to job {job_id}",
        results.len()
    );
    Ok(results)
}
