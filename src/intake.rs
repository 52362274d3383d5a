// ABOUTME: Job intake form: a mutable job draft and its submission
// ABOUTME: Resets the draft on success, keeps it for a retry on failure

use crate::error::BoardError;
use crate::remote::models::Job;
use crate::remote::JobApi;

pub const CREATED_MESSAGE: &str = "Job created successfully!";
pub const GENERIC_FAILURE: &str = "Failed to create job";

/// One field-level update of the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Role(String),
    Company(String),
    Experience(String),
    Location(String),
    Salary(String),
    Skills(Vec<String>),
    AboutCompany(String),
    PostedDaysAgo(u32),
    Applicants(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionField {
    Responsibilities,
    Requirements,
    NiceToHave,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMessage {
    Created,
    Failed(String),
}

impl SubmitMessage {
    pub fn text(&self) -> &str {
        match self {
            SubmitMessage::Created => CREATED_MESSAGE,
            SubmitMessage::Failed(msg) => msg,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitMessage::Created)
    }
}

#[derive(Debug)]
pub struct IntakeForm {
    draft: Job,
    message: Option<SubmitMessage>,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeForm {
    pub fn new() -> Self {
        Self {
            draft: Job::blank(),
            message: None,
        }
    }

    pub fn draft(&self) -> &Job {
        &self.draft
    }

    pub fn message(&self) -> Option<&SubmitMessage> {
        self.message.as_ref()
    }

    pub fn set_field(&mut self, update: FieldUpdate) {
        let job = &mut self.draft;
        match update {
            FieldUpdate::Role(v) => job.role = v,
            FieldUpdate::Company(v) => job.company = v,
            FieldUpdate::Experience(v) => job.experience = v,
            FieldUpdate::Location(v) => job.location = v,
            FieldUpdate::Salary(v) => job.salary = v,
            FieldUpdate::Skills(v) => job.skills = v,
            FieldUpdate::AboutCompany(v) => job.about_company = v,
            FieldUpdate::PostedDaysAgo(v) => job.posted_days_ago = v,
            FieldUpdate::Applicants(v) => job.applicants = v,
        }
    }

    pub fn set_description(&mut self, field: DescriptionField, value: impl Into<String>) {
        let description = &mut self.draft.description;
        let slot = match field {
            DescriptionField::Responsibilities => &mut description.responsibilities,
            DescriptionField::Requirements => &mut description.requirements,
            DescriptionField::NiceToHave => &mut description.nice_to_have,
        };
        *slot = value.into();
    }

    /// Company and role are the only required fields.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.draft.company.trim().is_empty() {
            return Err(BoardError::Validation("company is required".to_string()));
        }
        if self.draft.role.trim().is_empty() {
            return Err(BoardError::Validation("role is required".to_string()));
        }
        Ok(())
    }

    pub async fn submit<A: JobApi>(&mut self, api: &A) -> &SubmitMessage {
        let result = match self.validate() {
            Ok(()) => api.create_job(&self.draft).await.map(|_| ()),
            Err(err) => Err(err),
        };

        let message = match result {
            Ok(()) => {
                tracing::info!(id = self.draft.id, company = %self.draft.company, "job created");
                self.draft = Job::blank();
                SubmitMessage::Created
            }
            Err(err) => {
                tracing::warn!(id = self.draft.id, error = %err, "job creation failed");
                SubmitMessage::Failed(err.user_message().unwrap_or(GENERIC_FAILURE).to_string())
            }
        };

        self.message.insert(message)
    }
}
