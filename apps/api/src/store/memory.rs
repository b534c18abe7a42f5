use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobUpdate, NewJob};
use crate::models::resume::{NewResume, ResumeRecord};
use crate::store::DocumentStore;

/// In-memory store for tests. Each insert is stamped one second after the
/// previous one so recency ordering is deterministic.
#[derive(Default)]
pub struct MemoryStore {
    jobs: RwLock<Vec<JobPosting>>,
    resumes: RwLock<Vec<ResumeRecord>>,
    clock: RwLock<i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn tick(&self) -> DateTime<Utc> {
        let mut clock = self.clock.write().await;
        *clock += 1;
        Utc.timestamp_opt(*clock, 0).unwrap()
    }
}

fn newest_first<T: Clone>(items: &[T], created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    items
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_job(&self, job: NewJob) -> Result<JobPosting, AppError> {
        let job = job.into_posting(Uuid::new_v4(), self.tick().await);
        self.jobs.write().await.push(job.clone());
        Ok(job)
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>, AppError> {
        Ok(self.jobs.read().await.iter().find(|j| j.id == id).cloned())
    }

    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        Ok(newest_first(&self.jobs.read().await[..], |j| j.created_at))
    }

    async fn update_job(
        &self,
        id: Uuid,
        update: JobUpdate,
    ) -> Result<Option<JobPosting>, AppError> {
        let mut jobs = self.jobs.write().await;
        let Some(job) = jobs.iter_mut().find(|j| j.id == id) else {
            return Ok(None);
        };
        job.apply(update)?;
        Ok(Some(job.clone()))
    }

    async fn delete_job(&self, id: Uuid) -> Result<bool, AppError> {
        let mut jobs = self.jobs.write().await;
        let before = jobs.len();
        jobs.retain(|j| j.id != id);
        Ok(jobs.len() < before)
    }

    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRecord, AppError> {
        let record = resume.into_record(Uuid::new_v4(), self.tick().await);
        self.resumes.write().await.push(record.clone());
        Ok(record)
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        Ok(self.resumes.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn list_resumes(&self) -> Result<Vec<ResumeRecord>, AppError> {
        Ok(newest_first(&self.resumes.read().await[..], |r| r.created_at))
    }

    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError> {
        let mut resumes = self.resumes.write().await;
        let before = resumes.len();
        resumes.retain(|r| r.id != id);
        Ok(resumes.len() < before)
    }
}
