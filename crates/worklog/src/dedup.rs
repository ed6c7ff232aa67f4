//! Duplicate detection against the tracker's existing work logs.

use tracing::{debug, warn};

use crate::jira::WorklogApi;

/// Outcome of a duplicate lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuplicateCheck {
    /// A work log with the same `started` and comment exists.
    Exists,
    /// No matching work log.
    Missing,
    /// The listing could not be obtained. Callers treat this as [`Missing`](Self::Missing).
    Unavailable(String),
}

impl DuplicateCheck {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Exists)
    }
}

/// Looks up existing work logs for an issue.
///
/// Matching is exact string equality on both the `started` timestamp and the
/// comment text: no trimming, case folding or time normalization.
pub struct DuplicateDetector<'a> {
    api: &'a dyn WorklogApi,
}

impl<'a> DuplicateDetector<'a> {
    pub fn new(api: &'a dyn WorklogApi) -> Self {
        Self { api }
    }

    pub async fn check(&self, issue_id: &str, description: &str, started: &str) -> DuplicateCheck {
        let worklogs = match self.api.list_worklogs(issue_id).await {
            Ok(worklogs) => worklogs,
            Err(e) => {
                warn!(issue_id, error = %e, "Duplicate check unavailable, assuming no duplicate");
                return DuplicateCheck::Unavailable(e.to_string());
            }
        };

        let found = worklogs
            .iter()
            .any(|wl| wl.started == started && wl.comment_text() == description);

        debug!(issue_id, existing = worklogs.len(), found, "Duplicate check done");
        if found {
            DuplicateCheck::Exists
        } else {
            DuplicateCheck::Missing
        }
    }

    /// `true` only when a matching work log was positively found.
    pub async fn exists(&self, issue_id: &str, description: &str, started: &str) -> bool {
        self.check(issue_id, description, started).await.is_duplicate()
    }
}
