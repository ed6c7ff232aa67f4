//! Configuration for the Jira connection.

use std::env;
use std::time::Duration;

use crate::error::{Result, WorklogError};

/// Default timeout applied to every tracker request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Hour of day (UTC) used as the nominal start of every submitted work log.
pub const DAY_START_HOUR: u32 = 6;

/// Jira connection settings.
#[derive(Clone)]
pub struct JiraConfig {
    /// Jira instance URL, without trailing slash (e.g. `https://acme.atlassian.net`).
    pub base_url: String,
    /// Account email used for basic auth.
    pub email: String,
    /// Jira API token used for basic auth.
    pub api_token: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl JiraConfig {
    /// Create a config from explicit values.
    pub fn new(
        base_url: impl Into<String>,
        email: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            email: email.into(),
            api_token: api_token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `JIRA_BASE_URL`, `JIRA_EMAIL`, `JIRA_API_TOKEN` and `JIRA_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let required = |name: &str| {
            env::var(name).map_err(|_| WorklogError::Config {
                reason: format!("{name} is not set"),
            })
        };

        let timeout_secs = env::var("JIRA_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let config = Self::new(
            required("JIRA_BASE_URL")?,
            required("JIRA_EMAIL")?,
            required("JIRA_API_TOKEN")?,
        )
        .with_timeout(Duration::from_secs(timeout_secs));

        config.validate()?;
        Ok(config)
    }

    /// Reject configs that cannot possibly reach a tracker.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| {
            Err(WorklogError::Config {
                reason: reason.to_string(),
            })
        };

        if self.base_url.trim().is_empty() {
            return invalid("Jira base URL is empty");
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return invalid("Jira base URL must start with http:// or https://");
        }
        if self.email.trim().is_empty() {
            return invalid("Jira email is empty");
        }
        if self.api_token.trim().is_empty() {
            return invalid("Jira API token is empty");
        }
        if self.timeout.is_zero() {
            return invalid("Request timeout must be greater than zero");
        }
        Ok(())
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraConfig")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
