// ABOUTME: REST boundary of the job board
// ABOUTME: Declares the JobApi seam and its reqwest-backed implementation

use std::future::Future;

use serde_json::Value;

use crate::error::BoardError;

pub mod client;
pub mod models;

pub use client::ApiClient;
pub use models::{next_job_id, Job, JobDescription, JobQuery, SearchForm};

/// The two calls the board and the intake form make against `/api`.
pub trait JobApi {
    /// `GET /api?...`, returning the job records in server order.
    fn list_jobs(
        &self,
        query: &JobQuery,
    ) -> impl Future<Output = Result<Vec<Job>, BoardError>> + Send;

    /// `POST /api` with the full record. Any 2xx JSON body counts as success.
    fn create_job(&self, job: &Job) -> impl Future<Output = Result<Value, BoardError>> + Send;
}
