//! Store-backed search operations. Input is validated before the store is touched.

use tracing::info;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::models::resume::ResumeRecord;
use crate::search::filter::{JobFilter, JobFilterParams};
use crate::search::ranker::{rank_by_terms, QueryTerms};
use crate::store::DocumentStore;

pub async fn search_jobs(
    store: &dyn DocumentStore,
    query: &str,
) -> Result<Vec<JobPosting>, AppError> {
    let terms = QueryTerms::parse(query)?;
    let jobs = rank_by_terms(&terms, store.list_jobs().await?);
    info!("Job search with {} terms returned {} jobs", terms.len(), jobs.len());
    Ok(jobs)
}

pub async fn search_resumes(
    store: &dyn DocumentStore,
    query: &str,
) -> Result<Vec<ResumeRecord>, AppError> {
    let terms = QueryTerms::parse(query)?;
    let resumes = rank_by_terms(&terms, store.list_resumes().await?);
    info!(
        "Resume search with {} terms returned {} resumes",
        terms.len(),
        resumes.len()
    );
    Ok(resumes)
}

pub async fn filter_jobs(
    store: &dyn DocumentStore,
    params: JobFilterParams,
) -> Result<Vec<JobPosting>, AppError> {
    let filter = JobFilter::try_from(params)?;
    let jobs = filter.apply(store.list_jobs().await?);
    info!("Advanced job search returned {} jobs", jobs.len());
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{JobType, NewJob};
    use crate::models::resume::NewResume;
    use crate::store::MemoryStore;

    fn new_job(title: &str, company: &str, skills: &[&str]) -> NewJob {
        NewJob {
            title: title.to_string(),
            company: company.to_string(),
            location: None,
            salary: None,
            job_type: JobType::FullTime,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            requirements: vec![],
            experience: String::new(),
        }
    }

    async fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        store.insert_job(new_job("Rust Engineer", "Ferrous", &["Rust"])).await.unwrap();
        store.insert_job(new_job("Python Developer", "Snakes", &["Python"])).await.unwrap();
        store.insert_job(new_job("Rust Developer", "Crabs", &["Rust", "Go"])).await.unwrap();
        store
            .insert_resume(NewResume {
                name: "Ana".to_string(),
                email: String::new(),
                phone: String::new(),
                skills: vec!["Python".to_string()],
                resume_file: "resumes/ana.pdf".to_string(),
                parsed_text: "Python data engineer".to_string(),
            })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_search_jobs_ranks_matches_only() {
        let store = seeded().await;
        let jobs = search_jobs(&store, "rust").await.unwrap();
        let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles.len(), 2);
        assert!(!titles.contains(&"Python Developer"));
    }

    #[tokio::test]
    async fn test_search_jobs_equal_scores_follow_store_order() {
        let store = seeded().await;
        let jobs = search_jobs(&store, "developer").await.unwrap();
        let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
        // Same score; store order is newest first.
        assert_eq!(titles, vec!["Rust Developer", "Python Developer"]);
    }

    #[tokio::test]
    async fn test_search_resumes() {
        let store = seeded().await;
        assert_eq!(search_resumes(&store, "PYTHON").await.unwrap().len(), 1);
        assert!(search_resumes(&store, "cobol").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_search_is_validation_error() {
        let store = seeded().await;
        assert!(matches!(
            search_resumes(&store, " ").await,
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            search_jobs(&store, "").await,
            Err(AppError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_filter_jobs_without_predicates_returns_all_newest_first() {
        let store = seeded().await;
        let jobs = filter_jobs(&store, JobFilterParams::default()).await.unwrap();
        let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Rust Developer", "Python Developer", "Rust Engineer"]
        );
    }

    #[tokio::test]
    async fn test_filter_jobs_rejects_bad_salary() {
        let store = seeded().await;
        let params = JobFilterParams {
            min_salary: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            filter_jobs(&store, params).await,
            Err(AppError::Validation { .. })
        ));
    }
}
