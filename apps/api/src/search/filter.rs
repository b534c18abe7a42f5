//! Filter Evaluator: AND of optional field predicates over the job collection.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobType};

/// Raw query-string predicates for GET /api/jobs/advanced-search.
/// Everything arrives as text so malformed numbers can be reported per field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilterParams {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub min_salary: Option<String>,
    pub max_salary: Option<String>,
    pub skills: Option<String>,
    pub experience_level: Option<String>,
}

/// Validated predicates. `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    title: Option<String>,
    company: Option<String>,
    location: Option<String>,
    job_type: Option<JobType>,
    min_salary: Option<f64>,
    max_salary: Option<f64>,
    skills: Option<Vec<String>>,
    experience: Option<String>,
}

impl TryFrom<JobFilterParams> for JobFilter {
    type Error = AppError;

    fn try_from(params: JobFilterParams) -> Result<Self, Self::Error> {
        let job_type = present(params.job_type)
            .map(|v| v.parse::<JobType>().map_err(|e| AppError::validation("jobType", e)))
            .transpose()?;

        let skills = present(params.skills)
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|tokens| !tokens.is_empty());

        Ok(JobFilter {
            title: lowered(params.title),
            company: lowered(params.company),
            location: lowered(params.location),
            job_type,
            min_salary: parse_bound("minSalary", params.min_salary)?,
            max_salary: parse_bound("maxSalary", params.max_salary)?,
            skills,
            experience: lowered(params.experience_level),
        })
    }
}

impl JobFilter {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == JobFilter::default()
    }

    pub fn matches(&self, job: &JobPosting) -> bool {
        contains_ci(&job.title, self.title.as_deref())
            && contains_ci(&job.company, self.company.as_deref())
            && contains_ci(job.location.as_deref().unwrap_or(""), self.location.as_deref())
            && contains_ci(&job.experience, self.experience.as_deref())
            && self.job_type.map_or(true, |t| job.job_type == t)
            && self.salary_matches(job.salary)
            && self.skills_match(&job.skills)
    }

    /// Returns the matching jobs, newest first.
    pub fn apply(&self, jobs: Vec<JobPosting>) -> Vec<JobPosting> {
        let mut matched: Vec<JobPosting> = jobs.into_iter().filter(|j| self.matches(j)).collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched
    }

    fn salary_matches(&self, salary: Option<f64>) -> bool {
        if self.min_salary.is_none() && self.max_salary.is_none() {
            return true;
        }
        // A posting without a salary never satisfies a salary bound.
        let Some(salary) = salary else {
            return false;
        };
        self.min_salary.map_or(true, |min| salary >= min)
            && self.max_salary.map_or(true, |max| salary <= max)
    }

    fn skills_match(&self, job_skills: &[String]) -> bool {
        match &self.skills {
            None => true,
            Some(wanted) => job_skills.iter().any(|s| wanted.contains(s)),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn lowered(value: Option<String>) -> Option<String> {
    present(value).map(|v| v.to_lowercase())
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    needle.map_or(true, |n| haystack.to_lowercase().contains(n))
}

fn parse_bound(field: &str, value: Option<String>) -> Result<Option<f64>, AppError> {
    let Some(raw) = present(value) else {
        return Ok(None);
    };
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(AppError::validation(
            field,
            format!("{field} must be a number, got '{raw}'"),
        )),
    }
}
