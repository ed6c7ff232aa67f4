//! Jira worklog reconciliation.
//!
//! This crate provides:
//! - Loading stopwatch lap exports and deriving the tracked day
//! - Parsing issue keys out of lap labels and aggregating laps per issue
//! - Duplicate detection against the work logs already in Jira
//! - Work-log creation, or a dry-run simulation of it
//! - A deterministic success / skipped / failed report
//!
//! # Example
//!
//! ```no_run
//! use worklog::{input, JiraClient, JiraConfig, Reconciler, RunMode};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = JiraClient::new(&JiraConfig::from_env()?)?;
//! let export = input::load_export("laps 01.05.2024.json".as_ref())?;
//! let date = input::date_from_filename("laps 01.05.2024.json".as_ref()).unwrap();
//!
//! let report = Reconciler::new(&client, input::day_start(date), RunMode::DryRun)
//!     .run(&export.laps)
//!     .await;
//! println!("{}", report.render());
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod config;
pub mod dedup;
pub mod error;
pub mod input;
pub mod jira;
pub mod label;
pub mod reconcile;
pub mod report;
pub mod submit;
pub mod ui;

#[cfg(test)]
mod testing;

pub use aggregate::{aggregate, Aggregation, WorkGroup};
pub use config::JiraConfig;
pub use dedup::{DuplicateCheck, DuplicateDetector};
pub use error::{Result, TrackerError, WorklogError};
pub use input::{Lap, LapExport};
pub use jira::{JiraClient, NewWorklog, RemoteWorklog, WorklogApi};
pub use label::ParsedLabel;
pub use reconcile::Reconciler;
pub use report::{format_hhmm, RunMode, RunReport, RunStatus};
pub use submit::{SubmitOutcome, Submitter};
