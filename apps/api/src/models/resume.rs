use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::extraction::ExtractedProfile;

pub const UNKNOWN_CANDIDATE: &str = "Unknown";

/// A stored candidate résumé. `skills` only ever holds vocabulary keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub resume_file: String,
    pub parsed_text: String,
    pub created_at: DateTime<Utc>,
}

/// Everything needed to persist a freshly ingested résumé.
#[derive(Debug, Clone)]
pub struct NewResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub resume_file: String,
    pub parsed_text: String,
}

impl NewResume {
    /// Folds an extracted profile into a record. A blank name becomes "Unknown".
    pub fn from_profile(
        name: Option<String>,
        profile: ExtractedProfile,
        resume_file: String,
        parsed_text: String,
    ) -> Self {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string());
        NewResume {
            name,
            email: profile.email,
            phone: profile.phone,
            skills: profile.skills,
            resume_file,
            parsed_text,
        }
    }

    pub fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> ResumeRecord {
        ResumeRecord {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            skills: self.skills,
            resume_file: self.resume_file,
            parsed_text: self.parsed_text,
            created_at,
        }
    }
}
