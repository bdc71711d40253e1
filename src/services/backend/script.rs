use anyhow::Context;
use async_trait::async_trait;

use super::FeedbackBackend;
use crate::models::{LookupResponse, SubmissionPayload};

/// Google Apps Script deployment serving both the lookup and the
/// submission endpoint on a single URL.
pub struct ScriptBackend {
    url: String,
    client: reqwest::Client,
}

impl ScriptBackend {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl FeedbackBackend for ScriptBackend {
    async fn lookup(&self, encoded_email: &str) -> anyhow::Result<LookupResponse> {
        let resp = self
            .client
            .get(&self.url)
            .query(&[("email", encoded_email)])
            .send()
            .await
            .context("failed to call lookup endpoint")?;

        let data: LookupResponse = resp
            .json()
            .await
            .context("failed to parse lookup response")?;

        Ok(data)
    }

    async fn submit(&self, payload: &SubmissionPayload) -> anyhow::Result<()> {
        // The script replies opaquely to cross-origin posts; status and
        // body are not read. Dispatching without a transport error
        // counts as success.
        self.client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .context("failed to dispatch submission")?;

        Ok(())
    }
}
