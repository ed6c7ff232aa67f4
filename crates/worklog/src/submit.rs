//! Work-log submission, real or simulated.

use tracing::{debug, warn};

use crate::jira::{NewWorklog, WorklogApi};
use crate::report::format_hhmm;

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Tracker accepted the entry.
    Created,
    /// Simulation mode: nothing was sent. Carries the preview line.
    Simulated { preview: String },
    /// Tracker rejected the entry or could not be reached.
    Failed { reason: String },
}

impl SubmitOutcome {
    /// Simulated submissions count as successes for reporting.
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }
}

/// Creates work logs on the tracker, or previews them when simulating.
pub struct Submitter<'a> {
    api: &'a dyn WorklogApi,
    simulate: bool,
}

impl<'a> Submitter<'a> {
    pub fn new(api: &'a dyn WorklogApi, simulate: bool) -> Self {
        Self { api, simulate }
    }

    pub async fn submit(
        &self,
        issue_id: &str,
        started: &str,
        duration_seconds: i64,
        description: &str,
    ) -> SubmitOutcome {
        let payload = NewWorklog::new(started, duration_seconds, description);

        if self.simulate {
            debug!(issue_id, started, duration_seconds, "Simulated work log");
            return SubmitOutcome::Simulated {
                preview: format!(
                    "Worklog for {issue_id}: {description} ({})",
                    format_hhmm(payload.time_spent_seconds)
                ),
            };
        }

        match self.api.create_worklog(issue_id, &payload).await {
            Ok(()) => SubmitOutcome::Created,
            Err(e) => {
                warn!(issue_id, error = %e, "Failed to create work log");
                SubmitOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
