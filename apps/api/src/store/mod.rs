//! Document store: persistence seam for job and résumé records, plus the
//! object store holding uploaded résumé files.
//!
//! `AppState` holds an `Arc<dyn DocumentStore>`: `PgStore` in production,
//! `MemoryStore` in tests. Collections come back newest first (`created_at DESC`,
//! then `id`), which is the "collection order" ranking ties fall back to.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobUpdate, NewJob};
use crate::models::resume::{NewResume, ResumeRecord};

pub mod files;
#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use files::{FileStore, S3FileStore};
#[cfg(test)]
pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_job(&self, job: NewJob) -> Result<JobPosting, AppError>;
    async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>, AppError>;
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError>;
    /// `Ok(None)` when the job does not exist.
    async fn update_job(&self, id: Uuid, update: JobUpdate)
        -> Result<Option<JobPosting>, AppError>;
    /// `Ok(false)` when the job does not exist.
    async fn delete_job(&self, id: Uuid) -> Result<bool, AppError>;

    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRecord, AppError>;
    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError>;
    async fn list_resumes(&self) -> Result<Vec<ResumeRecord>, AppError>;
    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError>;
}
