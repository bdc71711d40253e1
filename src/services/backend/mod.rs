pub mod script;

use async_trait::async_trait;

use crate::models::{LookupResponse, SubmissionPayload};

/// The externally-owned spreadsheet-backed service behind the form:
/// one endpoint resolves an encoded email to a respondent profile and
/// meeting list, the other persists the completed feedback.
#[async_trait]
pub trait FeedbackBackend: Send + Sync {
    async fn lookup(&self, encoded_email: &str) -> anyhow::Result<LookupResponse>;
    async fn submit(&self, payload: &SubmissionPayload) -> anyhow::Result<()>;
}
