//! Worklog CLI - uploads stopwatch laps to Jira as work logs.
//!
//! Run `worklog --help` for usage information.

// CLI binaries legitimately need println! for user output
#![allow(clippy::disallowed_macros)]

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use worklog::config::DEFAULT_TIMEOUT_SECS;
use worklog::{input, ui, JiraClient, JiraConfig, Reconciler, RunMode, WorklogError};

#[derive(Parser)]
#[command(name = "worklog")]
#[command(about = "Upload stopwatch lap exports to Jira as work logs")]
#[command(version)]
struct Cli {
    /// Simulate: check for duplicates but create nothing in Jira
    #[arg(long)]
    dry_run: bool,

    /// Export file to upload (skips file selection)
    #[arg(short, long, conflicts_with = "dir")]
    file: Option<PathBuf>,

    /// Directory searched for `.json` exports
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Tracked day (YYYY-MM-DD), overrides the date in the file name
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Save the report as worklog_report_<date>.txt without asking
    #[arg(long)]
    save_report: bool,

    /// Never prompt: pick the first export, accept today's date, skip the save prompt
    #[arg(short, long)]
    yes: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Jira instance URL
    #[arg(long, env = "JIRA_BASE_URL", hide_env_values = true)]
    base_url: String,

    /// Jira account email
    #[arg(long, env = "JIRA_EMAIL", hide_env_values = true)]
    email: String,

    /// Jira API token
    #[arg(long, env = "JIRA_API_TOKEN", hide_env_values = true)]
    api_token: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "JIRA_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

impl Cli {
    fn interactive(&self) -> bool {
        !self.yes && std::io::stdin().is_terminal()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    ui::print_banner(cli.dry_run);

    let config = JiraConfig::new(&cli.base_url, &cli.email, &cli.api_token)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = JiraClient::new(&config).context("Invalid Jira configuration")?;

    let path = select_export(&cli)?;
    let export = input::load_export(&path)?;
    let date = resolve_date(&cli, &path)?;
    let started = input::day_start(date);

    ui::print_info(&format!(
        "{} ({} laps, day start {started})",
        path.display(),
        export.laps.len()
    ));

    let progress = ProgressBar::new(export.laps.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner:.yellow} Processing {pos}/{len} {wide_bar:.yellow}")
            .context("Invalid progress template")?,
    );

    let mode = RunMode::from_dry_run(cli.dry_run);
    let report = Reconciler::new(&client, started, mode)
        .run_with_progress(&export.laps, |done, total| {
            progress.set_length(total as u64);
            progress.set_position(done as u64);
        })
        .await;
    progress.finish_and_clear();

    println!();
    ui::print_previews(&report);
    ui::print_report(&report);
    println!();

    let save = cli.save_report
        || (cli.interactive()
            && Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("Save the report to a file?")
                .default(false)
                .interact()?);

    if save {
        let saved = report.save(Path::new("."), date)?;
        ui::print_success(&format!("Report saved to {}", saved.display()));
    }

    Ok(())
}

/// Pick the export to upload: `--file`, the only candidate, or an interactive choice.
fn select_export(cli: &Cli) -> Result<PathBuf> {
    if let Some(file) = &cli.file {
        return Ok(file.clone());
    }

    let files = input::find_exports(&cli.dir)?;
    if files.len() == 1 || !cli.interactive() {
        return Ok(files[0].clone());
    }

    let names: Vec<String> = files
        .iter()
        .map(|p| {
            p.file_name()
                .map_or_else(|| p.display().to_string(), |n| n.to_string_lossy().into_owned())
        })
        .collect();

    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select an export file")
        .default(0)
        .items(&names[..])
        .interact()?;

    Ok(files[idx].clone())
}

/// Tracked day from `--date`, the file name, or (after confirmation) today.
fn resolve_date(cli: &Cli, path: &Path) -> Result<NaiveDate> {
    if let Some(date) = cli.date.or_else(|| input::date_from_filename(path)) {
        return Ok(date);
    }

    ui::print_warning("Could not find a DD.MM.YYYY date in the file name.");
    let today = Utc::now().date_naive();

    let accept = cli.yes
        || (cli.interactive()
            && Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Use today's date ({today})?"))
                .default(false)
                .interact()?);

    if accept {
        Ok(today)
    } else {
        Err(WorklogError::Cancelled.into())
    }
}
