//! Console rendering for the CLI.
//!
//! This module uses println! for user-facing output.

#![allow(clippy::disallowed_macros)]

use colored::Colorize;

use crate::report::{RunReport, RunStatus};

/// Print the intro banner.
pub fn print_banner(dry_run: bool) {
    println!("{}", "═".repeat(60).bright_black());
    println!("{}", "Jira worklog upload".cyan().bold());
    println!(
        "  {}",
        "Reconciles stopwatch laps with the work logs already in Jira.".bright_black()
    );
    if dry_run {
        println!("  {}", "Dry run: nothing will be written to Jira.".yellow());
    }
    println!("{}", "═".repeat(60).bright_black());
    println!();
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

/// Print dry-run previews.
pub fn print_previews(report: &RunReport) {
    if report.previews.is_empty() {
        return;
    }
    println!("{}", "Dry-run simulation:".cyan().bold());
    for preview in &report.previews {
        println!("  {}", preview.cyan());
    }
    println!();
}

/// Print the summary header followed by every entry.
pub fn print_report(report: &RunReport) {
    let status = report.status().to_string();
    let status = match report.status() {
        RunStatus::Success => status.green().bold(),
        RunStatus::HasErrors => status.yellow().bold(),
        RunStatus::Failure => status.red().bold(),
    };

    println!(
        "{} {}",
        format!("Global report ({}):", report.mode.as_str()).yellow().bold(),
        status
    );
    println!("{} {}", "Day start:".cyan(), report.started);
    println!(
        "{}",
        format!(
            "Processed: {} laps in {} groups, Succeeded: {}, Skipped: {}, Failed: {}",
            report.laps,
            report.groups,
            report.success.len(),
            report.skipped.len(),
            report.failed.len()
        )
        .blue()
    );
    println!(
        "{} {}",
        "Total logged time:".green(),
        report.total_time().green().bold()
    );

    println!();
    println!("{}", "Entries:".yellow().bold());
    for item in &report.success {
        println!("{} {}", "✓ Success:".green(), item);
    }
    for item in &report.skipped {
        println!("{} {}", "⏭ Skipped:".yellow(), item);
    }
    for item in &report.failed {
        println!("{} {}", "✗ Failed:".red(), item);
    }

    if !report.lookup_failures.is_empty() {
        println!();
        println!("{}", "Notes:".bright_black().bold());
        for item in &report.lookup_failures {
            println!("  {}", item.bright_black());
        }
    }
}
