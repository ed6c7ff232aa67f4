//! REST client for Jira work logs.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::{debug, instrument, warn};

use super::models::{NewWorklog, RemoteWorklog, WorklogPage};
use super::WorklogApi;
use crate::config::JiraConfig;
use crate::error::{Result, TrackerError, WorklogError};

/// Jira Cloud REST client.
#[derive(Clone)]
pub struct JiraClient {
    client: reqwest::Client,
    base_url: String,
    email: String,
    api_token: String,
}

impl JiraClient {
    /// Create a client from a validated config.
    ///
    /// # Errors
    /// Returns error if the config is invalid or the HTTP client cannot be built
    pub fn new(config: &JiraConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(WorklogError::HttpClient)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            email: config.email.clone(),
            api_token: config.api_token.clone(),
        })
    }

    fn worklog_url(&self, issue_id: &str) -> String {
        format!("{}/rest/api/3/issue/{issue_id}/worklog", self.base_url)
    }
}

impl std::fmt::Debug for JiraClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraClient")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WorklogApi for JiraClient {
    #[instrument(skip(self))]
    async fn list_worklogs(
        &self,
        issue_id: &str,
    ) -> std::result::Result<Vec<RemoteWorklog>, TrackerError> {
        let response = self
            .client
            .get(self.worklog_url(issue_id))
            .basic_auth(&self.email, Some(&self.api_token))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Work-log listing rejected");
            return Err(TrackerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let page: WorklogPage = response
            .json()
            .await
            .map_err(|e| TrackerError::Decode(e.to_string()))?;

        debug!(count = page.worklogs.len(), "Fetched work logs");
        Ok(page.worklogs)
    }

    #[instrument(skip(self, worklog), fields(seconds = worklog.time_spent_seconds))]
    async fn create_worklog(
        &self,
        issue_id: &str,
        worklog: &NewWorklog,
    ) -> std::result::Result<(), TrackerError> {
        let response = self
            .client
            .post(self.worklog_url(issue_id))
            .basic_auth(&self.email, Some(&self.api_token))
            .json(worklog)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CREATED {
            debug!("Work log created");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, body = %body, "Work-log creation rejected");
        Err(TrackerError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
