// ABOUTME: Data structures for job postings and job list queries
// ABOUTME: These are serialized to JSON (camelCase) for API communication

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static LAST_JOB_ID: AtomicU64 = AtomicU64::new(0);

/// Issue a client-side job id from the millisecond clock.
///
/// Ids are strictly increasing within the process: a second call in the same
/// millisecond gets the previous id plus one.
pub fn next_job_id() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut last = LAST_JOB_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_JOB_ID.compare_exchange_weak(
            last,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate,
            Err(current) => last = current,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobDescription {
    pub responsibilities: String,
    pub requirements: String,
    pub nice_to_have: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    pub id: u64,
    pub role: String,
    pub company: String,
    pub experience: String,
    pub location: String,
    pub salary: String, // free text, e.g. "15-25 LPA"
    pub skills: Vec<String>,
    pub description: JobDescription,
    pub about_company: String,
    pub posted_days_ago: u32,
    pub applicants: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Job {
    /// Blank posting with a freshly issued id.
    pub fn blank() -> Self {
        Self {
            id: next_job_id(),
            ..Default::default()
        }
    }
}

/// Free-text search payload submitted from the search bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub search_term: String,
    pub location: String,
}

/// Query parameters for `GET /api`. Empty values are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    pub search_term: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub skills: Option<String>,
}

impl JobQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("searchTerm", &self.search_term),
            ("location", &self.location),
            ("company", &self.company),
            ("role", &self.role),
            ("skills", &self.skills),
        ]
        .into_iter()
        .filter_map(|(key, value)| match value.as_deref() {
            Some(v) if !v.is_empty() => Some((key, v.to_string())),
            _ => None,
        })
        .collect()
    }

    /// True when both queries ask the server for the same company/role/skills.
    pub fn same_server_filters(&self, other: &JobQuery) -> bool {
        self.company == other.company && self.role == other.role && self.skills == other.skills
    }
}

/// Body of a failed `POST /api` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}
