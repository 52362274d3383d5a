// ABOUTME: Board and intake form scenarios against an in-memory JobApi
// ABOUTME: Exercises fetch outcomes, filter toggles and submit messages without a network

use serde_json::{json, Value};
use std::sync::Mutex;

use jobboard::board::{ActiveTab, FetchOutcome, FilterCategory, FilterDropdown, JobBoard};
use jobboard::error::BoardError;
use jobboard::intake::{FieldUpdate, IntakeForm, SubmitMessage};
use jobboard::remote::{Job, JobApi, JobQuery, SearchForm};
use jobboard::render::render_board;

struct FakeApi {
    jobs: Vec<Job>,
    list_error: Option<BoardError>,
    create_result: Result<Value, BoardError>,
    queries: Mutex<Vec<JobQuery>>,
    created: Mutex<Vec<Job>>,
}

impl FakeApi {
    fn with_jobs(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            list_error: None,
            create_result: Ok(json!({ "message": "Job created" })),
            queries: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
        }
    }

    fn failing_list(err: BoardError) -> Self {
        Self {
            list_error: Some(err),
            ..Self::with_jobs(Vec::new())
        }
    }

    fn failing_create(err: BoardError) -> Self {
        Self {
            create_result: Err(err),
            ..Self::with_jobs(Vec::new())
        }
    }
}

impl JobApi for FakeApi {
    async fn list_jobs(&self, query: &JobQuery) -> Result<Vec<Job>, BoardError> {
        self.queries.lock().unwrap().push(query.clone());
        match &self.list_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.jobs.clone()),
        }
    }

    async fn create_job(&self, job: &Job) -> Result<Value, BoardError> {
        self.created.lock().unwrap().push(job.clone());
        self.create_result.clone()
    }
}

fn job(id: u64, company: &str, role: &str, skills: &[&str]) -> Job {
    Job {
        id,
        company: company.to_string(),
        role: role.to_string(),
        location: "Remote".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

fn four_jobs() -> Vec<Job> {
    vec![
        job(10, "CredePath Tech", "Frontend Engineer", &["React"]),
        job(11, "DataFlow Systems", "Backend Developer", &["Node.js"]),
        job(12, "CredePath Tech", "Full Stack Developer", &["React", "Node.js"]),
        job(13, "CloudWorks", "DevOps Engineer", &["AWS"]),
    ]
}

#[tokio::test]
async fn test_company_filter_scenario() {
    let api = FakeApi::with_jobs(four_jobs());
    let mut board = JobBoard::new();
    board.fetch(&api, None).await;

    board.toggle_filter(FilterCategory::Company, "CredePath Tech");

    let visible: Vec<u64> = board.visible_jobs().map(|j| j.id).collect();
    assert_eq!(visible, vec![10, 12]);
    assert_eq!(board.active_job().map(|j| j.id), Some(10));
}

#[tokio::test]
async fn test_lowercase_skill_matches_capitalized_skill() {
    let api = FakeApi::with_jobs(vec![job(1, "CloudWorks", "Frontend Engineer", &["React"])]);
    let mut board = JobBoard::new();
    board.fetch(&api, None).await;

    board.toggle_filter(FilterCategory::Skills, "react");
    assert_eq!(board.visible_len(), 1);
    assert_eq!(board.active_job().map(|j| j.id), Some(1));
}

#[tokio::test]
async fn test_initial_fetch_sends_empty_query() {
    let api = FakeApi::with_jobs(four_jobs());
    let mut board = JobBoard::new();

    let outcome = board.fetch(&api, None).await;
    assert_eq!(outcome, FetchOutcome::Applied { count: 4 });
    assert_eq!(board.active_job().map(|j| j.id), Some(10));

    let queries = api.queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert!(queries[0].to_pairs().is_empty());
}

#[tokio::test]
async fn test_search_carries_payload_and_server_filters() {
    let api = FakeApi::with_jobs(four_jobs());
    let mut board = JobBoard::new();
    board.toggle_filter(FilterCategory::Skills, "React");
    board.toggle_filter(FilterCategory::Salary, "< 15 LPA");

    let search = SearchForm {
        search_term: "developer".to_string(),
        location: "Remote".to_string(),
    };
    board.fetch(&api, Some(&search)).await;

    let queries = api.queries.lock().unwrap();
    assert_eq!(
        queries[0].to_pairs(),
        vec![
            ("searchTerm", "developer".to_string()),
            ("location", "Remote".to_string()),
            ("skills", "React".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_failed_fetch_clears_board() {
    let mut board = JobBoard::new();
    board.fetch(&FakeApi::with_jobs(four_jobs()), None).await;
    assert_eq!(board.visible_len(), 4);

    let api = FakeApi::failing_list(BoardError::Rejected {
        status: 503,
        message: None,
    });
    let outcome = board.fetch(&api, None).await;

    assert_eq!(outcome, FetchOutcome::Failed);
    assert!(board.jobs().is_empty());
    assert!(board.active_job().is_none());
}

#[tokio::test]
async fn test_dropdown_drives_board() {
    let api = FakeApi::with_jobs(four_jobs());
    let mut board = JobBoard::new();
    board.fetch(&api, None).await;
    board.select(3);
    board.set_tab(ActiveTab::Saved);

    let mut dropdowns: Vec<FilterDropdown> = FilterCategory::ALL
        .iter()
        .map(|c| FilterDropdown::new(*c))
        .collect();
    let jobs_dropdown = &mut dropdowns[1];
    jobs_dropdown.click();
    jobs_dropdown.choose("Developer", |c, v| board.toggle_filter(c, v));

    let visible: Vec<u64> = board.visible_jobs().map(|j| j.id).collect();
    assert_eq!(visible, vec![11, 12]);
    assert_eq!(board.active_job().map(|j| j.id), Some(11));

    let text = render_board(&board, &dropdowns);
    assert!(text.contains("*Saved*"));
    assert!(text.contains("[Company v] [Developer v]"));
    assert!(text.contains("> [DS] Backend Developer"));
}

#[tokio::test]
async fn test_intake_success_resets_with_new_id() {
    let api = FakeApi::with_jobs(Vec::new());
    let mut form = IntakeForm::new();
    form.set_field(FieldUpdate::Company("Acme".to_string()));
    form.set_field(FieldUpdate::Role("Backend Developer".to_string()));
    let submitted_id = form.draft().id;

    assert_eq!(form.submit(&api).await, &SubmitMessage::Created);
    assert_ne!(form.draft().id, submitted_id);
    assert_eq!(form.draft().company, "");
    assert_eq!(form.message(), Some(&SubmitMessage::Created));

    let created = api.created.lock().unwrap();
    assert_eq!(created[0].id, submitted_id);
    assert_eq!(created[0].company, "Acme");
}

#[tokio::test]
async fn test_intake_server_message_shown_and_draft_kept() {
    let api = FakeApi::failing_create(BoardError::Rejected {
        status: 400,
        message: Some("role required".to_string()),
    });
    let mut form = IntakeForm::new();
    form.set_field(FieldUpdate::Company("Acme".to_string()));
    form.set_field(FieldUpdate::Role("Backend Developer".to_string()));
    let before = form.draft().clone();

    assert_eq!(form.submit(&api).await.text(), "role required");
    assert_eq!(form.draft(), &before);
}

#[tokio::test]
async fn test_intake_transport_failure_uses_generic_message() {
    let api = FakeApi::failing_create(BoardError::Connection("connection reset".to_string()));
    let mut form = IntakeForm::new();
    form.set_field(FieldUpdate::Company("Acme".to_string()));
    form.set_field(FieldUpdate::Role("Backend Developer".to_string()));

    assert_eq!(form.submit(&api).await.text(), "Failed to create job");
    assert_eq!(form.draft().company, "Acme");
}

#[tokio::test]
async fn test_intake_missing_role_is_not_sent() {
    let api = FakeApi::with_jobs(Vec::new());
    let mut form = IntakeForm::new();
    form.set_field(FieldUpdate::Company("Acme".to_string()));

    assert_eq!(form.submit(&api).await.text(), "role is required");
    assert!(api.created.lock().unwrap().is_empty());
}
