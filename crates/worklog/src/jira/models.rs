//! Jira work-log payloads and the Atlassian Document Format subset they use.

use serde::{Deserialize, Serialize};

/// A node of an Atlassian Document Format (ADF) tree.
///
/// Only the fields needed to build a single-paragraph comment and to read
/// one back are modelled; unknown attributes are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdfNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<AdfNode>,
}

impl AdfNode {
    /// `doc > paragraph > text` wrapping `text`.
    pub fn paragraph_doc(text: &str) -> Self {
        let text_node = Self {
            kind: "text".to_string(),
            version: None,
            text: Some(text.to_string()),
            content: Vec::new(),
        };
        let paragraph = Self {
            kind: "paragraph".to_string(),
            version: None,
            text: None,
            content: vec![text_node],
        };
        Self {
            kind: "doc".to_string(),
            version: Some(1),
            text: None,
            content: vec![paragraph],
        }
    }

    /// Text of the first inline node of the first block, or `""`.
    pub fn first_text(&self) -> &str {
        self.content
            .first()
            .and_then(|block| block.content.first())
            .and_then(|inline| inline.text.as_deref())
            .unwrap_or("")
    }
}

/// A work log as returned by `GET /rest/api/3/issue/{key}/worklog`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteWorklog {
    #[serde(default)]
    pub started: String,
    #[serde(default)]
    pub comment: Option<AdfNode>,
}

impl RemoteWorklog {
    /// Plain-text comment, `""` when absent or not a simple paragraph.
    pub fn comment_text(&self) -> &str {
        self.comment.as_ref().map_or("", AdfNode::first_text)
    }
}

/// Page wrapper of the work-log listing.
#[derive(Debug, Deserialize)]
pub(crate) struct WorklogPage {
    #[serde(default)]
    pub worklogs: Vec<RemoteWorklog>,
}

/// Body of `POST /rest/api/3/issue/{key}/worklog`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorklog {
    pub started: String,
    pub time_spent_seconds: i64,
    pub comment: AdfNode,
}

impl NewWorklog {
    pub fn new(started: &str, time_spent_seconds: i64, description: &str) -> Self {
        Self {
            started: started.to_string(),
            time_spent_seconds,
            comment: AdfNode::paragraph_doc(description),
        }
    }
}
