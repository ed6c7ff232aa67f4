//! Lap label parsing.
//!
//! A label such as `"RS-12 review PR"` carries the Jira issue key and a free
//! text description. Only the first key-shaped token is used as the issue
//! key; a different key later in the label stays part of the description.

use std::sync::LazyLock;

use regex::Regex;

static ISSUE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]+-[0-9]+").expect("valid issue id regex"));

/// Issue key and description extracted from one lap label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLabel {
    pub issue_id: Option<String>,
    pub description: String,
}

impl ParsedLabel {
    pub fn parse(text: &str) -> Self {
        Self {
            issue_id: parse_issue_id(text),
            description: parse_description(text),
        }
    }
}

/// First `[A-Z]+-[0-9]+` match in `text`, if any.
pub fn parse_issue_id(text: &str) -> Option<String> {
    ISSUE_ID.find(text).map(|m| m.as_str().to_string())
}

/// `text` with the issue key removed, trimmed.
///
/// Every occurrence of the extracted key is removed, so a label that repeats
/// its own key never leaves it behind in the description. Removal is plain
/// substring removal: a longer key that starts with the extracted one loses
/// that prefix too (`"RS-1 fix RS-12"` gives `"fix 2"`).
pub fn parse_description(text: &str) -> String {
    match ISSUE_ID.find(text) {
        Some(m) => text.replace(m.as_str(), "").trim().to_string(),
        None => text.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_id_at_start() {
        let parsed = ParsedLabel::parse("RS-1 fix bug");
        assert_eq!(parsed.issue_id.as_deref(), Some("RS-1"));
        assert_eq!(parsed.description, "fix bug");
    }

    #[test]
    fn test_issue_id_in_middle() {
        assert_eq!(parse_issue_id("review CORE-42 again").as_deref(), Some("CORE-42"));
        assert_eq!(parse_description("review CORE-42 again"), "review  again");
    }

    #[test]
    fn test_no_issue_id() {
        assert_eq!(parse_issue_id("no id here"), None);
        assert_eq!(parse_description("  no id here "), "no id here");
        assert_eq!(parse_issue_id("rs-1 lowercase"), None);
        assert_eq!(parse_issue_id("RS- missing digits"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let parsed = ParsedLabel::parse("RS-1 port fix from RS-2");
        assert_eq!(parsed.issue_id.as_deref(), Some("RS-1"));
        assert_eq!(parsed.description, "port fix from RS-2");
    }

    #[test]
    fn test_repeated_id_removed() {
        assert_eq!(parse_description("RS-1 follow-up to RS-1"), "follow-up to");
    }

    #[test]
    fn test_longer_key_sharing_prefix_is_cut() {
        let parsed = ParsedLabel::parse("RS-1 fix RS-12");
        assert_eq!(parsed.issue_id.as_deref(), Some("RS-1"));
        assert_eq!(parsed.description, "fix 2");
    }

    #[test]
    fn test_issue_id_only() {
        let parsed = ParsedLabel::parse("RS-2 ");
        assert_eq!(parsed.issue_id.as_deref(), Some("RS-2"));
        assert_eq!(parsed.description, "");
    }

    #[test]
    fn test_description_never_contains_id_token() {
        for label in ["ABC-7 write docs", "x ABC-7", "ABC-7", "ABC-7 again ABC-7", "ABC-77 ABC-7"] {
            let parsed = ParsedLabel::parse(label);
            let id = parsed.issue_id.unwrap();
            assert!(
                !parsed.description.split_whitespace().any(|t| t == id),
                "{label:?} -> {:?}",
                parsed.description
            );
        }
    }
}
