//! Reconciliation report.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{Result, WorklogError};

/// Format seconds as zero-padded `HH:MM` (hours are not wrapped at 24).
pub fn format_hhmm(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{hours:02}:{minutes:02}")
}

/// Whether a run submitted for real or only simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Real,
    DryRun,
}

impl RunMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            Self::DryRun
        } else {
            Self::Real
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Real => "REAL",
            Self::DryRun => "DRY-RUN",
        }
    }
}

/// Overall outcome, derived from the entry counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Nothing failed or was skipped.
    Success,
    /// Some entries succeeded alongside failures or skips.
    HasErrors,
    /// No entry succeeded and at least one failed or was skipped.
    Failure,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "Success",
            Self::HasErrors => "Has errors",
            Self::Failure => "Failure",
        })
    }
}

/// Outcome of one reconciliation run.
///
/// Entry lists are append-only while the engine runs and keep append order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub mode: RunMode,
    /// Nominal start timestamp shared by every submitted work log.
    pub started: String,
    /// Laps read from the export.
    pub laps: usize,
    /// Groups produced by aggregation.
    pub groups: usize,
    pub success: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
    /// Duplicate lookups that could not be performed.
    pub lookup_failures: Vec<String>,
    /// Dry-run preview lines, in submission order.
    pub previews: Vec<String>,
    /// Seconds logged by successful (or simulated) submissions.
    pub total_seconds: i64,
}

impl RunReport {
    pub fn new(mode: RunMode, started: impl Into<String>) -> Self {
        Self {
            mode,
            started: started.into(),
            laps: 0,
            groups: 0,
            success: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
            lookup_failures: Vec::new(),
            previews: Vec::new(),
            total_seconds: 0,
        }
    }

    pub fn status(&self) -> RunStatus {
        if self.failed.is_empty() && self.skipped.is_empty() {
            RunStatus::Success
        } else if self.success.is_empty() {
            RunStatus::Failure
        } else {
            RunStatus::HasErrors
        }
    }

    pub fn total_time(&self) -> String {
        format_hhmm(self.total_seconds)
    }

    /// Plain-text rendering: header, then success, skipped and failed entries.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Global report ({}): {}\n",
            self.mode.as_str(),
            self.status()
        ));
        out.push_str(&format!("Day start: {}\n", self.started));
        out.push_str(&format!(
            "Processed: {} laps in {} groups, Succeeded: {}, Skipped: {}, Failed: {}\n",
            self.laps,
            self.groups,
            self.success.len(),
            self.skipped.len(),
            self.failed.len()
        ));
        out.push_str(&format!("Total logged time: {}\n\n", self.total_time()));

        out.push_str("Entries:\n");
        for item in &self.success {
            out.push_str(&format!("Success: {item}\n"));
        }
        for item in &self.skipped {
            out.push_str(&format!("Skipped: {item}\n"));
        }
        for item in &self.failed {
            out.push_str(&format!("Failed: {item}\n"));
        }

        if !self.lookup_failures.is_empty() {
            out.push_str("\nNotes:\n");
            for item in &self.lookup_failures {
                out.push_str(&format!("{item}\n"));
            }
        }
        out
    }

    /// Report file name for a tracked day.
    pub fn file_name(date: NaiveDate) -> String {
        format!("worklog_report_{}.txt", date.format("%Y-%m-%d"))
    }

    /// Write [`render`](Self::render) into `dir` and return the file path.
    pub fn save(&self, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
        let path = dir.join(Self::file_name(date));
        std::fs::write(&path, self.render()).map_err(|source| WorklogError::ReportWrite {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(success: usize, skipped: usize, failed: usize) -> RunReport {
        let mut report = RunReport::new(RunMode::Real, "2024-05-01T06:00:00.000+0000");
        report.success = vec!["ok".to_string(); success];
        report.skipped = vec!["dup".to_string(); skipped];
        report.failed = vec!["bad".to_string(); failed];
        report
    }

    #[test]
    fn test_format_hhmm() {
        assert_eq!(format_hhmm(0), "00:00");
        assert_eq!(format_hhmm(59), "00:00");
        assert_eq!(format_hhmm(5400), "01:30");
        assert_eq!(format_hhmm(900), "00:15");
        assert_eq!(format_hhmm(100 * 3600 + 61), "100:01");
    }

    #[test]
    fn test_status() {
        assert_eq!(report_with(0, 0, 0).status(), RunStatus::Success);
        assert_eq!(report_with(3, 0, 0).status(), RunStatus::Success);
        assert_eq!(report_with(1, 1, 0).status(), RunStatus::HasErrors);
        assert_eq!(report_with(1, 0, 1).status(), RunStatus::HasErrors);
        assert_eq!(report_with(0, 1, 0).status(), RunStatus::Failure);
        assert_eq!(report_with(0, 0, 2).status(), RunStatus::Failure);
    }

    #[test]
    fn test_render_order() {
        let mut report = RunReport::new(RunMode::DryRun, "2024-05-01T06:00:00.000+0000");
        report.laps = 4;
        report.groups = 3;
        report.failed.push("No issue id found in: lunch".to_string());
        report.success.push("Added worklog for RS-1: fix bug (01:30)".to_string());
        report.skipped.push("Worklog already exists for RS-3: deploy".to_string());
        report.total_seconds = 5400;

        let expected = "\
Global report (DRY-RUN): Has errors
Day start: 2024-05-01T06:00:00.000+0000
Processed: 4 laps in 3 groups, Succeeded: 1, Skipped: 1, Failed: 1
Total logged time: 01:30

Entries:
Success: Added worklog for RS-1: fix bug (01:30)
Skipped: Worklog already exists for RS-3: deploy
Failed: No issue id found in: lunch
";
        assert_eq!(report.render(), expected);
    }

    #[test]
    fn test_render_notes() {
        let mut report = report_with(1, 0, 0);
        report
            .lookup_failures
            .push("Duplicate check unavailable for RS-1: timeout".to_string());
        assert!(report
            .render()
            .ends_with("\nNotes:\nDuplicate check unavailable for RS-1: timeout\n"));
    }

    #[test]
    fn test_save() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let report = report_with(1, 0, 0);

        let path = report.save(dir.path(), date).unwrap();
        assert_eq!(path.file_name().unwrap(), "worklog_report_2024-05-01.txt");
        assert_eq!(std::fs::read_to_string(path).unwrap(), report.render());
    }
}
