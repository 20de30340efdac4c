use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

/// Account kind: employers post jobs, jobseekers apply to them.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Employer,
    Jobseeker,
}

impl FromStr for UserType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employer" => Ok(UserType::Employer),
            "jobseeker" => Ok(UserType::Jobseeker),
            _ => Err(()),
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserType::Employer => f.write_str("employer"),
            UserType::Jobseeker => f.write_str("jobseeker"),
        }
    }
}

/// Application statuses the schema layer accepts at creation time.
/// The status-update path deliberately accepts any string.
pub const APPLICATION_STATUSES: [&str; 5] =
    ["applied", "reviewed", "interview", "rejected", "hired"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub email: String,
    pub user_type: UserType,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub user_type: UserType,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: String,
    /// Free text, may embed a range like "$50,000 - $70,000".
    pub salary: Option<String>,
    pub job_type: String,
    pub category: String,
    pub experience_level: String,
    pub skills: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub posted_date: OffsetDateTime,
    pub employer_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: String,
    pub salary: Option<String>,
    pub job_type: String,
    pub category: String,
    pub experience_level: String,
    pub skills: Vec<String>,
    pub posted_date: OffsetDateTime,
    pub employer_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
    pub cover_letter: Option<String>,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub applied_date: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub job_id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
    pub cover_letter: Option<String>,
    pub status: String,
    pub applied_date: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub job_count: i64,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
    pub job_count: i64,
}
