use serde::Deserialize;
use time::OffsetDateTime;

use crate::store::NewJob;
use crate::validation::{require_i64, require_list, require_string, Violation};

/// Request body for posting a job.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub category: Option<String>,
    pub experience_level: Option<String>,
    pub skills: Option<Vec<String>>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub posted_date: Option<OffsetDateTime>,
    pub employer_id: Option<i64>,
}

impl CreateJobRequest {
    /// Validates the body; an absent postedDate defaults to `now`.
    pub fn validate(self, now: OffsetDateTime) -> Result<NewJob, Vec<Violation>> {
        let mut violations = Vec::new();

        let title = require_string("title", self.title, &mut violations);
        let company = require_string("company", self.company, &mut violations);
        let location = require_string("location", self.location, &mut violations);
        let description = require_string("description", self.description, &mut violations);
        let requirements = require_string("requirements", self.requirements, &mut violations);
        let job_type = require_string("jobType", self.job_type, &mut violations);
        let category = require_string("category", self.category, &mut violations);
        let experience_level =
            require_string("experienceLevel", self.experience_level, &mut violations);
        let skills = require_list("skills", self.skills, &mut violations);
        let employer_id = require_i64("employerId", self.employer_id, &mut violations);

        if !violations.is_empty() {
            return Err(violations);
        }

        Ok(NewJob {
            title,
            company,
            location,
            description,
            requirements,
            salary: self.salary,
            job_type,
            category,
            experience_level,
            skills,
            posted_date: self.posted_date.unwrap_or(now),
            employer_id,
        })
    }
}
