//! Explicit request validation. Each create/patch body is checked field by
//! field; failures accumulate as [`Violation`]s and are flattened into one
//! human-readable message for the 400 response.

/// A single field-level schema violation.
#[derive(Debug, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Joins violations into one sentence, e.g.
/// `Validation error: username is required; userType must be one of employer, jobseeker`.
pub fn summarize(violations: &[Violation]) -> String {
    let details: Vec<String> = violations
        .iter()
        .map(|v| format!("{} {}", v.field, v.message))
        .collect();
    format!("Validation error: {}", details.join("; "))
}

/// Unwraps a required string field, recording a violation when it is
/// missing or blank.
pub fn require_string(
    field: &'static str,
    value: Option<String>,
    violations: &mut Vec<Violation>,
) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            violations.push(Violation::new(field, "is required"));
            String::new()
        }
    }
}

pub fn require_i64(
    field: &'static str,
    value: Option<i64>,
    violations: &mut Vec<Violation>,
) -> i64 {
    match value {
        Some(v) => v,
        None => {
            violations.push(Violation::new(field, "is required"));
            0
        }
    }
}

pub fn require_list(
    field: &'static str,
    value: Option<Vec<String>>,
    violations: &mut Vec<Violation>,
) -> Vec<String> {
    match value {
        Some(v) => v,
        None => {
            violations.push(Violation::new(field, "is required"));
            Vec::new()
        }
    }
}
