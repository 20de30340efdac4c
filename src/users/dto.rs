use serde::Deserialize;

use crate::store::{NewUser, UserType};
use crate::validation::{require_string, Violation};

/// Request body for user creation. Fields are optional at the serde level
/// so that missing ones surface as schema violations, not parse failures.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub user_type: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(self) -> Result<NewUser, Vec<Violation>> {
        let mut violations = Vec::new();

        let username = require_string("username", self.username, &mut violations);
        let password = require_string("password", self.password, &mut violations);
        let email = require_string("email", self.email, &mut violations);
        let user_type = match self.user_type.as_deref() {
            Some(raw) => raw.parse::<UserType>().unwrap_or_else(|_| {
                violations.push(Violation::new(
                    "userType",
                    "must be one of employer, jobseeker",
                ));
                UserType::Jobseeker
            }),
            None => {
                violations.push(Violation::new("userType", "is required"));
                UserType::Jobseeker
            }
        };

        if !violations.is_empty() {
            return Err(violations);
        }

        Ok(NewUser {
            username,
            password,
            email,
            user_type,
            company_name: self.company_name,
            location: self.location,
            bio: self.bio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateUserRequest {
        CreateUserRequest {
            username: Some("acme-hr".into()),
            password: Some("s3cret".into()),
            email: Some("hr@acme.example".into()),
            user_type: Some("employer".into()),
            company_name: Some("Acme Corp".into()),
            location: None,
            bio: None,
        }
    }

    #[test]
    fn valid_request_maps_to_new_user() {
        let data = full_request().validate().unwrap();
        assert_eq!(data.username, "acme-hr");
        assert_eq!(data.user_type, UserType::Employer);
        assert_eq!(data.company_name.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn missing_required_fields_are_collected() {
        let request = CreateUserRequest::default();
        let violations = request.validate().unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["username", "password", "email", "userType"]);
    }

    #[test]
    fn unknown_user_type_is_a_violation() {
        let mut request = full_request();
        request.user_type = Some("admin".into());
        let violations = request.validate().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "userType");
    }
}
