//! Lap export discovery and loading.
//!
//! An export is a JSON document produced by the stopwatch app:
//!
//! ```json
//! { "laps": [ { "text": "RS-1 fix bug", "diff": 3600000 } ] }
//! ```
//!
//! The export's file name usually carries the tracked day as `DD.MM.YYYY`,
//! which becomes the nominal start time of every submitted work log.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::config::DAY_START_HOUR;
use crate::error::{Result, WorklogError};

static FILE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2}\.\d{2}\.\d{4})").expect("valid date regex"));

/// One raw timed entry from the export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Lap {
    /// Free-form label typed by the user.
    pub text: String,
    /// Elapsed time in milliseconds.
    #[serde(rename = "diff")]
    pub duration_millis: i64,
}

impl Lap {
    pub fn new(text: impl Into<String>, duration_millis: i64) -> Self {
        Self {
            text: text.into(),
            duration_millis,
        }
    }
}

/// Parsed export document.
#[derive(Debug, Clone, Deserialize)]
pub struct LapExport {
    pub laps: Vec<Lap>,
}

/// List `.json` files directly inside `dir`, sorted by file name.
pub fn find_exports(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| WorklogError::InputRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(WorklogError::NoExports {
            dir: dir.to_path_buf(),
        });
    }

    debug!(count = files.len(), dir = %dir.display(), "Found export files");
    Ok(files)
}

/// Read and parse an export file.
pub fn load_export(path: &Path) -> Result<LapExport> {
    let content = std::fs::read_to_string(path).map_err(|source| WorklogError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    let export: LapExport =
        serde_json::from_str(&content).map_err(|source| WorklogError::InputParse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(laps = export.laps.len(), path = %path.display(), "Loaded export");
    Ok(export)
}

/// Extract the tracked day from a `DD.MM.YYYY` token in the file name.
pub fn date_from_filename(path: &Path) -> Option<NaiveDate> {
    let name = path.file_name()?.to_str()?;
    let token = FILE_DATE.captures(name)?.get(1)?.as_str();
    NaiveDate::parse_from_str(token, "%d.%m.%Y").ok()
}

/// Nominal start timestamp for a tracked day: 06:00 UTC, millisecond precision.
///
/// Duplicate detection compares this string verbatim against the tracker's
/// `started` field, so the format must match Jira's exactly.
pub fn day_start(date: NaiveDate) -> String {
    date.and_hms_opt(DAY_START_HOUR, 0, 0)
        .unwrap_or_default()
        .and_utc()
        .format("%Y-%m-%dT%H:%M:%S%.3f%z")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_from_filename() {
        let path = Path::new("/exports/laps 01.05.2024.json");
        assert_eq!(
            date_from_filename(path),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }

    #[test]
    fn test_date_from_filename_missing_or_invalid() {
        assert_eq!(date_from_filename(Path::new("laps.json")), None);
        assert_eq!(date_from_filename(Path::new("laps-31.02.2024.json")), None);
    }

    #[test]
    fn test_day_start_format() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(day_start(date), "2024-05-01T06:00:00.000+0000");
    }

    #[test]
    fn test_find_exports_sorted_json_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b 02.05.2024.json"), "{}").unwrap();
        std::fs::write(dir.path().join("a 01.05.2024.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let files = find_exports(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a 01.05.2024.json", "b 02.05.2024.json"]);
    }

    #[test]
    fn test_find_exports_empty_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_exports(dir.path()).unwrap_err();
        assert!(matches!(err, WorklogError::NoExports { .. }));
    }

    #[test]
    fn test_load_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("laps.json");
        std::fs::write(
            &path,
            r#"{"laps":[{"text":"RS-1 fix bug","diff":3600000,"lap":1}],"total":3600000}"#,
        )
        .unwrap();

        let export = load_export(&path).unwrap();
        assert_eq!(export.laps, vec![Lap::new("RS-1 fix bug", 3_600_000)]);
    }

    #[test]
    fn test_load_export_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_export(&path).unwrap_err();
        assert!(matches!(err, WorklogError::InputParse { .. }));
    }

    #[test]
    fn test_load_export_missing_file() {
        let err = load_export(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, WorklogError::InputRead { .. }));
    }
}
