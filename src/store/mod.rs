//! Process-memory data store. All four entity collections live behind a
//! single lock; ids are per-entity monotonic sequences starting at 1 and
//! are never reused. Records are only ever created, except for the two
//! documented mutations (application status, category job count).

mod filter;
mod models;

pub use filter::JobFilters;
pub use models::{
    Application, Category, Job, NewApplication, NewCategory, NewJob, NewUser, User, UserType,
    APPLICATION_STATUSES,
};

use std::collections::BTreeMap;
use std::sync::RwLock;

use time::OffsetDateTime;

/// Returned by [`Store::create_user`] when the username is already taken.
/// The uniqueness check and the insert run under one write-lock
/// acquisition, so two racing creates cannot both pass it.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Username '{0}' already exists")]
pub struct DuplicateUsername(pub String);

/// Demo categories inserted at construction. The job counts are seed
/// values for display and drift from the true totals by design: they only
/// ever increment, and nothing recomputes them.
const SEED_CATEGORIES: [(&str, &str, i64); 8] = [
    ("Technology", "laptop-code", 120),
    ("Design", "pen-nib", 48),
    ("Marketing", "bullhorn", 35),
    ("Finance", "chart-line", 27),
    ("Healthcare", "stethoscope", 54),
    ("Education", "graduation-cap", 19),
    ("Sales", "handshake", 31),
    ("Customer Support", "headset", 22),
];

// BTreeMap keyed by a monotonic id keeps iteration in insertion order,
// which get_categories relies on.
#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    jobs: BTreeMap<i64, Job>,
    applications: BTreeMap<i64, Application>,
    categories: BTreeMap<i64, Category>,
    next_user_id: i64,
    next_job_id: i64,
    next_application_id: i64,
    next_category_id: i64,
}

pub struct Store {
    tables: RwLock<Tables>,
}

impl Store {
    pub fn new() -> Self {
        let store = Self {
            tables: RwLock::new(Tables::default()),
        };
        for (name, icon, job_count) in SEED_CATEGORIES {
            store.create_category(NewCategory {
                name: name.to_string(),
                icon: icon.to_string(),
                job_count,
            });
        }
        store
    }

    pub fn create_user(&self, data: NewUser) -> Result<User, DuplicateUsername> {
        let mut tables = self.tables.write().unwrap();
        if tables.users.values().any(|u| u.username == data.username) {
            return Err(DuplicateUsername(data.username));
        }
        tables.next_user_id += 1;
        let user = User {
            id: tables.next_user_id,
            username: data.username,
            password: data.password,
            email: data.email,
            user_type: data.user_type,
            company_name: data.company_name,
            location: data.location,
            bio: data.bio,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn get_user(&self, id: i64) -> Option<User> {
        self.tables.read().unwrap().users.get(&id).cloned()
    }

    /// Exact, case-sensitive username lookup.
    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.tables
            .read()
            .unwrap()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Stores the job and bumps the job count of the category whose name
    /// exactly matches the job's category field, if there is one.
    pub fn create_job(&self, data: NewJob) -> Job {
        let mut tables = self.tables.write().unwrap();
        tables.next_job_id += 1;
        let job = Job {
            id: tables.next_job_id,
            title: data.title,
            company: data.company,
            location: data.location,
            description: data.description,
            requirements: data.requirements,
            salary: data.salary,
            job_type: data.job_type,
            category: data.category,
            experience_level: data.experience_level,
            skills: data.skills,
            posted_date: data.posted_date,
            employer_id: data.employer_id,
        };
        tables.jobs.insert(job.id, job.clone());
        if let Some(category) = tables
            .categories
            .values_mut()
            .find(|c| c.name == job.category)
        {
            category.job_count += 1;
        }
        job
    }

    pub fn get_job(&self, id: i64) -> Option<Job> {
        self.tables.read().unwrap().jobs.get(&id).cloned()
    }

    /// Jobs matching every active filter, most recently posted first.
    pub fn get_jobs(&self, filters: &JobFilters) -> Vec<Job> {
        let now = OffsetDateTime::now_utc();
        let mut jobs: Vec<Job> = {
            let tables = self.tables.read().unwrap();
            tables
                .jobs
                .values()
                .filter(|job| filter::matches(job, filters, now))
                .cloned()
                .collect()
        };
        jobs.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
        jobs
    }

    pub fn get_jobs_by_employer(&self, employer_id: i64) -> Vec<Job> {
        self.tables
            .read()
            .unwrap()
            .jobs
            .values()
            .filter(|job| job.employer_id == employer_id)
            .cloned()
            .collect()
    }

    pub fn create_application(&self, data: NewApplication) -> Application {
        let mut tables = self.tables.write().unwrap();
        tables.next_application_id += 1;
        let application = Application {
            id: tables.next_application_id,
            job_id: data.job_id,
            user_id: data.user_id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            resume: data.resume,
            cover_letter: data.cover_letter,
            status: data.status,
            applied_date: data.applied_date,
        };
        tables.applications.insert(application.id, application.clone());
        application
    }

    pub fn get_applications_by_job(&self, job_id: i64) -> Vec<Application> {
        self.tables
            .read()
            .unwrap()
            .applications
            .values()
            .filter(|app| app.job_id == job_id)
            .cloned()
            .collect()
    }

    pub fn get_applications_by_user(&self, user_id: i64) -> Vec<Application> {
        self.tables
            .read()
            .unwrap()
            .applications
            .values()
            .filter(|app| app.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Replaces only the status field. The value is stored verbatim; this
    /// path does not check it against the recognized status set.
    pub fn update_application_status(&self, id: i64, status: &str) -> Option<Application> {
        let mut tables = self.tables.write().unwrap();
        let application = tables.applications.get_mut(&id)?;
        application.status = status.to_string();
        Some(application.clone())
    }

    /// All categories in insertion order.
    pub fn get_categories(&self) -> Vec<Category> {
        self.tables
            .read()
            .unwrap()
            .categories
            .values()
            .cloned()
            .collect()
    }

    pub fn get_category(&self, id: i64) -> Option<Category> {
        self.tables.read().unwrap().categories.get(&id).cloned()
    }

    pub fn create_category(&self, data: NewCategory) -> Category {
        let mut tables = self.tables.write().unwrap();
        tables.next_category_id += 1;
        let category = Category {
            id: tables.next_category_id,
            name: data.name,
            icon: data.icon,
            job_count: data.job_count,
        };
        tables.categories.insert(category.id, category.clone());
        category
    }

    pub fn increment_category_job_count(&self, id: i64) -> Option<Category> {
        let mut tables = self.tables.write().unwrap();
        let category = tables.categories.get_mut(&id)?;
        category.job_count += 1;
        Some(category.clone())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
