use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;

/// Employment type of a posting. Serialized with the labels shown on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
    Remote,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Remote => "Remote",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full-time" => Ok(JobType::FullTime),
            "Part-time" => Ok(JobType::PartTime),
            "Contract" => Ok(JobType::Contract),
            "Internship" => Ok(JobType::Internship),
            "Remote" => Ok(JobType::Remote),
            other => Err(format!(
                "'{other}' is not one of Full-time, Part-time, Contract, Internship, Remote"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub salary: Option<f64>,
    pub job_type: JobType,
    pub skills: Vec<String>,
    pub requirements: Vec<String>,
    pub experience: String,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    /// Applies a partial update. `id` and `created_at` never change.
    pub fn apply(&mut self, update: JobUpdate) -> Result<(), AppError> {
        update.validate()?;
        let JobUpdate {
            title,
            company,
            location,
            salary,
            job_type,
            skills,
            requirements,
            experience,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(company) = company {
            self.company = company;
        }
        if location.is_some() {
            self.location = location;
        }
        if salary.is_some() {
            self.salary = salary;
        }
        if let Some(job_type) = job_type {
            self.job_type = job_type;
        }
        if let Some(skills) = skills {
            self.skills = skills;
        }
        if let Some(requirements) = requirements {
            self.requirements = requirements;
        }
        if let Some(experience) = experience {
            self.experience = experience;
        }
        Ok(())
    }
}

/// POST /api/jobs body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    pub location: Option<String>,
    pub salary: Option<f64>,
    #[serde(default)]
    pub job_type: JobType,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub experience: String,
}

impl NewJob {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("title", &self.title)?;
        require_text("company", &self.company)
    }

    pub fn into_posting(self, id: Uuid, created_at: DateTime<Utc>) -> JobPosting {
        JobPosting {
            id,
            title: self.title,
            company: self.company,
            location: self.location,
            salary: self.salary,
            job_type: self.job_type,
            skills: self.skills,
            requirements: self.requirements,
            experience: self.experience,
            created_at,
        }
    }
}

/// PUT /api/jobs/:id body. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdate {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<f64>,
    pub job_type: Option<JobType>,
    pub skills: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub experience: Option<String>,
}

impl JobUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(company) = &self.company {
            require_text("company", company)?;
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(field, format!("{field} is required")));
    }
    Ok(())
}

#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub salary: Option<f64>,
    pub job_type: String,
    pub skills: Vec<String>,
    pub requirements: Vec<String>,
    pub experience: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for JobPosting {
    type Error = AppError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        let job_type = row
            .job_type
            .parse::<JobType>()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("job {}: {e}", row.id)))?;
        Ok(JobPosting {
            id: row.id,
            title: row.title,
            company: row.company,
            location: row.location,
            salary: row.salary,
            job_type,
            skills: row.skills,
            requirements: row.requirements,
            experience: row.experience,
            created_at: row.created_at,
        })
    }
}
