use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use time::{Duration, OffsetDateTime};

use crate::store::models::Job;

/// Optional constraints on a job listing query. Unset fields impose no
/// restriction; set fields combine conjunctively.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFilters {
    pub search: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    /// Comma-separated set, e.g. "full-time,contract".
    pub job_type: Option<String>,
    /// Comma-separated set, e.g. "entry,mid".
    pub experience_level: Option<String>,
    /// One of last24h/last3d/last7d/last14d; anything else means all time.
    pub date_posted: Option<String>,
    /// Minimum salary, digits extracted from the raw value ("$55,000").
    pub salary_range: Option<String>,
}

pub(crate) fn matches(job: &Job, filters: &JobFilters, now: OffsetDateTime) -> bool {
    matches_search(job, filters.search.as_deref())
        && matches_location(job, filters.location.as_deref())
        && matches_category(job, filters.category.as_deref())
        && matches_member(&job.job_type, filters.job_type.as_deref())
        && matches_member(&job.experience_level, filters.experience_level.as_deref())
        && matches_date_posted(job, filters.date_posted.as_deref(), now)
        && matches_salary(job, filters.salary_range.as_deref())
}

fn matches_search(job: &Job, search: Option<&str>) -> bool {
    let Some(term) = search else { return true };
    let needle = term.to_lowercase();
    job.title.to_lowercase().contains(&needle)
        || job.company.to_lowercase().contains(&needle)
        || job.description.to_lowercase().contains(&needle)
}

fn matches_location(job: &Job, location: Option<&str>) -> bool {
    let Some(loc) = location else { return true };
    job.location.to_lowercase().contains(&loc.to_lowercase())
}

fn matches_category(job: &Job, category: Option<&str>) -> bool {
    let Some(cat) = category else { return true };
    job.category == cat
}

/// Membership in a comma-separated set, exact token match.
fn matches_member(value: &str, set: Option<&str>) -> bool {
    let Some(set) = set else { return true };
    set.split(',').any(|member| member == value)
}

fn matches_date_posted(job: &Job, date_posted: Option<&str>, now: OffsetDateTime) -> bool {
    let Some(days) = date_posted.and_then(window_days) else {
        return true;
    };
    job.posted_date >= now - Duration::days(days)
}

fn window_days(token: &str) -> Option<i64> {
    match token {
        "last24h" => Some(1),
        "last3d" => Some(3),
        "last7d" => Some(7),
        "last14d" => Some(14),
        _ => None,
    }
}

fn matches_salary(job: &Job, salary_range: Option<&str>) -> bool {
    let Some(threshold) = salary_range.and_then(salary_threshold) else {
        return true;
    };
    match job.salary.as_deref().and_then(min_salary) {
        Some(min) => min >= threshold,
        // No parseable salary on the job excludes it while the filter is on.
        None => false,
    }
}

/// Minimum acceptable salary from a raw filter value: every digit, in order.
fn salary_threshold(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// A job's minimum salary: the first dollar-amount token in its free-text
/// salary field, commas allowed ("$50,000 - $70,000" -> 50000).
fn min_salary(salary: &str) -> Option<i64> {
    lazy_static! {
        static ref DOLLAR_RE: Regex = Regex::new(r"\$\s*(\d[\d,]*)").unwrap();
    }
    let caps = DOLLAR_RE.captures(salary)?;
    caps[1].replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn job() -> Job {
        Job {
            id: 1,
            title: "Senior Backend Engineer".into(),
            company: "Acme Corp".into(),
            location: "Berlin, Germany".into(),
            description: "Own the payments platform".into(),
            requirements: "5y Rust".into(),
            salary: Some("$60,000 - $80,000".into()),
            job_type: "full-time".into(),
            category: "Technology".into(),
            experience_level: "senior".into(),
            skills: vec!["rust".into()],
            posted_date: datetime!(2024-05-10 12:00 UTC),
            employer_id: 1,
        }
    }

    fn now() -> OffsetDateTime {
        datetime!(2024-05-12 12:00 UTC)
    }

    #[test]
    fn empty_filters_match_everything() {
        assert!(matches(&job(), &JobFilters::default(), now()));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let filters = JobFilters {
            search: Some("ACME".into()),
            ..Default::default()
        };
        assert!(matches(&job(), &filters, now()));

        let filters = JobFilters {
            search: Some("payments".into()),
            ..Default::default()
        };
        assert!(matches(&job(), &filters, now()));

        let filters = JobFilters {
            search: Some("frontend".into()),
            ..Default::default()
        };
        assert!(!matches(&job(), &filters, now()));
    }

    #[test]
    fn location_is_substring_case_insensitive() {
        let filters = JobFilters {
            location: Some("berlin".into()),
            ..Default::default()
        };
        assert!(matches(&job(), &filters, now()));

        let filters = JobFilters {
            location: Some("Paris".into()),
            ..Default::default()
        };
        assert!(!matches(&job(), &filters, now()));
    }

    #[test]
    fn category_is_exact() {
        let filters = JobFilters {
            category: Some("Technology".into()),
            ..Default::default()
        };
        assert!(matches(&job(), &filters, now()));

        let filters = JobFilters {
            category: Some("technology".into()),
            ..Default::default()
        };
        assert!(!matches(&job(), &filters, now()));
    }

    #[test]
    fn job_type_and_experience_are_set_membership() {
        let filters = JobFilters {
            job_type: Some("contract,full-time".into()),
            experience_level: Some("senior".into()),
            ..Default::default()
        };
        assert!(matches(&job(), &filters, now()));

        let filters = JobFilters {
            job_type: Some("contract,part-time".into()),
            ..Default::default()
        };
        assert!(!matches(&job(), &filters, now()));
    }

    #[test]
    fn filters_combine_conjunctively() {
        // Search matches but job type does not: the AND must fail.
        let filters = JobFilters {
            search: Some("acme".into()),
            job_type: Some("part-time".into()),
            ..Default::default()
        };
        assert!(!matches(&job(), &filters, now()));

        let filters = JobFilters {
            search: Some("acme".into()),
            job_type: Some("full-time".into()),
            ..Default::default()
        };
        assert!(matches(&job(), &filters, now()));
    }

    #[test]
    fn date_posted_windows() {
        // Job posted 2 days before "now".
        let filters = JobFilters {
            date_posted: Some("last24h".into()),
            ..Default::default()
        };
        assert!(!matches(&job(), &filters, now()));

        let filters = JobFilters {
            date_posted: Some("last3d".into()),
            ..Default::default()
        };
        assert!(matches(&job(), &filters, now()));

        // Unrecognized tokens, "all" included, impose no constraint.
        let filters = JobFilters {
            date_posted: Some("all".into()),
            ..Default::default()
        };
        assert!(matches(&job(), &filters, now()));
    }

    #[test]
    fn salary_threshold_comparisons() {
        let filters = JobFilters {
            salary_range: Some("$55,000".into()),
            ..Default::default()
        };
        assert!(matches(&job(), &filters, now()));

        let filters = JobFilters {
            salary_range: Some("$90,000".into()),
            ..Default::default()
        };
        assert!(!matches(&job(), &filters, now()));
    }

    #[test]
    fn salary_filter_excludes_unparseable_salaries() {
        let mut no_salary = job();
        no_salary.salary = None;
        let mut text_salary = job();
        text_salary.salary = Some("competitive".into());

        let filters = JobFilters {
            salary_range: Some("10000".into()),
            ..Default::default()
        };
        assert!(!matches(&no_salary, &filters, now()));
        assert!(!matches(&text_salary, &filters, now()));
    }

    #[test]
    fn salary_filter_without_digits_is_ignored() {
        let filters = JobFilters {
            salary_range: Some("any".into()),
            ..Default::default()
        };
        let mut no_salary = job();
        no_salary.salary = None;
        assert!(matches(&no_salary, &filters, now()));
    }

    #[test]
    fn min_salary_takes_first_dollar_token() {
        assert_eq!(min_salary("$50,000 - $70,000"), Some(50_000));
        assert_eq!(min_salary("up to $120,000 DOE"), Some(120_000));
        assert_eq!(min_salary("$ 90000"), Some(90_000));
        assert_eq!(min_salary("80k-100k"), None);
        assert_eq!(min_salary("competitive"), None);
    }

    #[test]
    fn salary_threshold_strips_non_digits() {
        assert_eq!(salary_threshold("$55,000"), Some(55_000));
        assert_eq!(salary_threshold("55000+"), Some(55_000));
        assert_eq!(salary_threshold("any"), None);
    }
}
