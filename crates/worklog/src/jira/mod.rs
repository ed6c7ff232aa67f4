//! Jira work-log access.
//!
//! The reconciliation pipeline only needs two remote operations, listing the
//! work logs of an issue and creating one. [`WorklogApi`] is that seam;
//! [`JiraClient`] implements it against the Jira Cloud REST API v3.

mod client;
mod models;

pub use client::JiraClient;
pub use models::{AdfNode, NewWorklog, RemoteWorklog};

use async_trait::async_trait;

use crate::error::TrackerError;

/// Remote work-log operations used by the pipeline.
#[async_trait]
pub trait WorklogApi: Send + Sync {
    /// All work logs the tracker returns for `issue_id` (first page only).
    async fn list_worklogs(&self, issue_id: &str) -> Result<Vec<RemoteWorklog>, TrackerError>;

    /// Create one work log. `Ok` means the tracker accepted the entry.
    async fn create_worklog(&self, issue_id: &str, worklog: &NewWorklog)
        -> Result<(), TrackerError>;
}
