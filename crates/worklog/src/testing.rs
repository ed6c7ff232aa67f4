//! In-memory tracker used by unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::TrackerError;
use crate::jira::{AdfNode, NewWorklog, RemoteWorklog, WorklogApi};

#[derive(Default)]
pub struct FakeTracker {
    worklogs: Mutex<HashMap<String, Vec<RemoteWorklog>>>,
    rejected: HashSet<String>,
    unreachable: HashSet<String>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

impl FakeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing work log.
    pub fn with_worklog(self, issue_id: &str, started: &str, comment: &str) -> Self {
        self.worklogs
            .lock()
            .unwrap()
            .entry(issue_id.to_string())
            .or_default()
            .push(RemoteWorklog {
                started: started.to_string(),
                comment: Some(AdfNode::paragraph_doc(comment)),
            });
        self
    }

    /// Creation for `issue_id` answers 400.
    pub fn rejecting(mut self, issue_id: &str) -> Self {
        self.rejected.insert(issue_id.to_string());
        self
    }

    /// Listing for `issue_id` fails.
    pub fn unreachable(mut self, issue_id: &str) -> Self {
        self.unreachable.insert(issue_id.to_string());
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self, issue_id: &str) -> Vec<RemoteWorklog> {
        self.worklogs
            .lock()
            .unwrap()
            .get(issue_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl WorklogApi for FakeTracker {
    async fn list_worklogs(&self, issue_id: &str) -> Result<Vec<RemoteWorklog>, TrackerError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable.contains(issue_id) {
            return Err(TrackerError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(self.stored(issue_id))
    }

    async fn create_worklog(
        &self,
        issue_id: &str,
        worklog: &NewWorklog,
    ) -> Result<(), TrackerError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.rejected.contains(issue_id) {
            return Err(TrackerError::Status {
                status: 400,
                body: "rejected".to_string(),
            });
        }
        self.worklogs
            .lock()
            .unwrap()
            .entry(issue_id.to_string())
            .or_default()
            .push(RemoteWorklog {
                started: worklog.started.clone(),
                comment: Some(worklog.comment.clone()),
            });
        Ok(())
    }
}
