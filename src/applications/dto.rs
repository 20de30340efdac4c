use serde::Deserialize;
use time::OffsetDateTime;

use crate::store::{NewApplication, APPLICATION_STATUSES};
use crate::validation::{require_i64, require_string, Violation};

/// Request body for submitting an application.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateApplicationRequest {
    pub job_id: Option<i64>,
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
    pub status: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub applied_date: Option<OffsetDateTime>,
}

impl CreateApplicationRequest {
    /// Validates the body; status defaults to "applied" and appliedDate to
    /// `now` when omitted.
    pub fn validate(self, now: OffsetDateTime) -> Result<NewApplication, Vec<Violation>> {
        let mut violations = Vec::new();

        let job_id = require_i64("jobId", self.job_id, &mut violations);
        let user_id = require_i64("userId", self.user_id, &mut violations);
        let name = require_string("name", self.name, &mut violations);
        let email = require_string("email", self.email, &mut violations);
        let phone = require_string("phone", self.phone, &mut violations);
        let resume = require_string("resume", self.resume, &mut violations);

        let status = match self.status {
            Some(s) if APPLICATION_STATUSES.contains(&s.as_str()) => s,
            Some(_) => {
                violations.push(Violation::new(
                    "status",
                    format!("must be one of {}", APPLICATION_STATUSES.join(", ")),
                ));
                String::new()
            }
            None => "applied".to_string(),
        };

        if !violations.is_empty() {
            return Err(violations);
        }

        Ok(NewApplication {
            job_id,
            user_id,
            name,
            email,
            phone,
            resume,
            cover_letter: self.cover_letter,
            status,
            applied_date: self.applied_date.unwrap_or(now),
        })
    }
}

/// Body of PATCH /applications/:id/status.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn full_request() -> CreateApplicationRequest {
        CreateApplicationRequest {
            job_id: Some(4),
            user_id: Some(9),
            name: Some("Jo Applicant".into()),
            email: Some("jo@example.com".into()),
            phone: Some("555-0100".into()),
            resume: Some("https://example.com/resume.pdf".into()),
            cover_letter: None,
            status: None,
            applied_date: None,
        }
    }

    #[test]
    fn defaults_are_injected() {
        let now = datetime!(2024-05-01 12:00 UTC);
        let data = full_request().validate(now).unwrap();
        assert_eq!(data.status, "applied");
        assert_eq!(data.applied_date, now);
    }

    #[test]
    fn explicit_status_is_kept_when_recognized() {
        let mut request = full_request();
        request.status = Some("reviewed".into());
        let data = request.validate(datetime!(2024-05-01 12:00 UTC)).unwrap();
        assert_eq!(data.status, "reviewed");
    }

    #[test]
    fn unrecognized_status_is_a_violation_at_creation() {
        let mut request = full_request();
        request.status = Some("ghosted".into());
        let violations = request
            .validate(datetime!(2024-05-01 12:00 UTC))
            .unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "status");
    }

    #[test]
    fn missing_required_fields_are_collected() {
        let violations = CreateApplicationRequest::default()
            .validate(datetime!(2024-05-01 12:00 UTC))
            .unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec!["jobId", "userId", "name", "email", "phone", "resume"]
        );
    }
}
