//! Outbound chat notification for task completion.
//!
//! [`SlackClient`] posts a short message to a preconfigured channel when a
//! task is marked complete. The call is best-effort: callers log failures
//! and move on; a notification error never fails the request that
//! triggered it.

use std::time::Duration;

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Production chat-post endpoint.
const DEFAULT_API_URL: &str = "https://slack.com/api/chat.postMessage";

/// Channel receiving completion messages.
const DEFAULT_CHANNEL: &str = "task-notifications";

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Notification settings, injected at client construction.
///
/// Nothing reads the process environment at call time; a missing token
/// turns each delivery into a logged no-op.
#[derive(Debug, Clone)]
pub struct SlackConfig {
    /// Bearer credential for the chat API. `None` disables delivery.
    pub api_token: Option<String>,
    /// Channel the completion message is posted to.
    pub channel: String,
    /// Chat-post endpoint URL (overridable for testing).
    pub api_url: String,
}

impl SlackConfig {
    /// Load settings from environment variables.
    ///
    /// | Env Var           | Default                                   |
    /// |-------------------|-------------------------------------------|
    /// | `SLACK_API_TOKEN` | unset (delivery disabled)                 |
    /// | `SLACK_CHANNEL`   | `task-notifications`                      |
    /// | `SLACK_API_URL`   | `https://slack.com/api/chat.postMessage`  |
    pub fn from_env() -> Self {
        Self {
            api_token: std::env::var("SLACK_API_TOKEN")
                .ok()
                .filter(|token| !token.is_empty()),
            channel: std::env::var("SLACK_CHANNEL").unwrap_or_else(|_| DEFAULT_CHANNEL.into()),
            api_url: std::env::var("SLACK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()),
        }
    }

    /// Settings with delivery disabled, for tests and local development.
    pub fn disabled() -> Self {
        Self {
            api_token: None,
            channel: DEFAULT_CHANNEL.into(),
            api_url: DEFAULT_API_URL.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The chat API returned a non-2xx status code.
    #[error("notification endpoint returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// SlackClient
// ---------------------------------------------------------------------------

/// Delivers task completion messages to the configured chat channel.
pub struct SlackClient {
    client: reqwest::Client,
    config: SlackConfig,
}

impl SlackClient {
    /// Create a client with a pre-configured HTTP transport.
    pub fn new(config: SlackConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Post a completion message naming the task.
    ///
    /// A missing credential skips delivery with a warning; every other
    /// failure mode returns an error instead of panicking so the caller
    /// can log and continue.
    pub async fn task_completed(&self, title: &str) -> Result<(), NotifyError> {
        let Some(token) = &self.config.api_token else {
            tracing::warn!(title, "Notification token not configured, skipping delivery");
            return Ok(());
        };

        let payload = serde_json::json!({
            "channel": self.config.channel,
            "text": format!("Someone just completed the task {title}"),
        });

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
