//! Reconciliation engine - aggregates laps and resolves each group against
//! the tracker, one group at a time.
//!
//! Per group: validate, look for a duplicate, then submit. Every outcome lands
//! in the [`RunReport`]; nothing short of a fatal input error aborts a run.
//!
//! The duplicate lookup and the creation call are not atomic. Another writer
//! can add a matching work log between the two and it will not be noticed.

use tracing::{debug, info};

use crate::aggregate::{aggregate, WorkGroup};
use crate::dedup::{DuplicateCheck, DuplicateDetector};
use crate::input::Lap;
use crate::jira::WorklogApi;
use crate::report::{format_hhmm, RunMode, RunReport};
use crate::submit::{SubmitOutcome, Submitter};

/// Drives one reconciliation run.
pub struct Reconciler<'a> {
    api: &'a dyn WorklogApi,
    started: String,
    mode: RunMode,
}

impl<'a> Reconciler<'a> {
    /// `started` is the nominal day-start timestamp used for every group.
    pub fn new(api: &'a dyn WorklogApi, started: impl Into<String>, mode: RunMode) -> Self {
        Self {
            api,
            started: started.into(),
            mode,
        }
    }

    pub async fn run(&self, laps: &[Lap]) -> RunReport {
        self.run_with_progress(laps, |_, _| {}).await
    }

    /// Like [`run`](Self::run), calling `progress(done, total)` after each
    /// invalid lap and each group.
    pub async fn run_with_progress<F>(&self, laps: &[Lap], mut progress: F) -> RunReport
    where
        F: FnMut(usize, usize),
    {
        let aggregation = aggregate(laps);
        let total = aggregation.unit_count();
        let mut done = 0;

        let mut report = RunReport::new(self.mode, self.started.clone());
        report.laps = laps.len();
        report.groups = aggregation.groups.len();

        info!(
            laps = laps.len(),
            groups = aggregation.groups.len(),
            invalid = aggregation.invalid_laps.len(),
            mode = self.mode.as_str(),
            "Starting reconciliation"
        );

        for lap in &aggregation.invalid_laps {
            report.failed.push(format!("No issue id found in: {}", lap.text));
            done += 1;
            progress(done, total);
        }

        let detector = DuplicateDetector::new(self.api);
        let submitter = Submitter::new(self.api, self.mode == RunMode::DryRun);

        for group in &aggregation.groups {
            self.process_group(group, &detector, &submitter, &mut report)
                .await;
            done += 1;
            progress(done, total);
        }

        info!(
            status = %report.status(),
            success = report.success.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            total = %report.total_time(),
            "Reconciliation finished"
        );
        report
    }

    async fn process_group(
        &self,
        group: &WorkGroup,
        detector: &DuplicateDetector<'_>,
        submitter: &Submitter<'_>,
        report: &mut RunReport,
    ) {
        let issue_id = group.issue_id.as_str();
        let description = group.description.as_str();
        let seconds = group.duration_seconds();

        if group.overflowed {
            debug!(issue_id, laps = group.lap_count, "Duration sum overflowed");
            report.failed.push(format!(
                "Duration overflow for {issue_id}: text='{description}'"
            ));
            return;
        }

        if !group.is_valid() {
            debug!(issue_id, seconds, label = %group.label, "Invalid group");
            report.failed.push(format!(
                "Invalid data for {issue_id}: time={seconds}, text='{description}'"
            ));
            return;
        }

        match detector.check(issue_id, description, &self.started).await {
            DuplicateCheck::Exists => {
                report
                    .skipped
                    .push(format!("Worklog already exists for {issue_id}: {description}"));
                return;
            }
            DuplicateCheck::Unavailable(reason) => {
                report
                    .lookup_failures
                    .push(format!("Duplicate check unavailable for {issue_id}: {reason}"));
            }
            DuplicateCheck::Missing => {}
        }

        let outcome = submitter
            .submit(issue_id, &self.started, seconds, description)
            .await;

        if let SubmitOutcome::Simulated { preview } = &outcome {
            report.previews.push(preview.clone());
        }

        if outcome.is_success() {
            report.success.push(format!(
                "Added worklog for {issue_id}: {description} ({})",
                format_hhmm(seconds)
            ));
            report.total_seconds = report.total_seconds.saturating_add(seconds);
        } else {
            report
                .failed
                .push(format!("Failed to add worklog for {issue_id}: {description}"));
        }
    }
}
