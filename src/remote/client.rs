// ABOUTME: HTTP client for the job board REST endpoint
// ABOUTME: Handles job listing, job creation, and server error extraction

use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

use super::models::{ErrorBody, Job, JobQuery};
use super::JobApi;
use crate::error::BoardError;

pub struct ApiClient {
    client: Client,
    endpoint: String,
}

impl ApiClient {
    pub fn new(endpoint: String) -> Result<Self> {
        Self::with_timeout(endpoint, Duration::from_secs(30))
    }

    pub fn with_timeout(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

async fn rejection(response: Response) -> BoardError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty());
    BoardError::Rejected { status, message }
}

impl JobApi for ApiClient {
    async fn list_jobs(&self, query: &JobQuery) -> Result<Vec<Job>, BoardError> {
        tracing::debug!(endpoint = %self.endpoint, ?query, "fetching jobs");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query.to_pairs())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let jobs: Vec<Job> = response.json().await?;
        Ok(jobs)
    }

    async fn create_job(&self, job: &Job) -> Result<Value, BoardError> {
        tracing::debug!(endpoint = %self.endpoint, id = job.id, "creating job");

        let response = self.client.post(&self.endpoint).json(job).send().await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let created: Value = response.json().await?;
        Ok(created)
    }
}
