use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::notify::Notifier;
use crate::notify::pushbullet_config::PushbulletConfig;
use crate::types::notification::Notification;

pub const PUSHBULLET_PUSHES_URL: &str = "https://api.pushbullet.com/v2/pushes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    Delivered,
    Rejected { status: StatusCode, message: String },
}

#[derive(Clone, Debug)]
pub struct PushbulletClient {
    http: reqwest::Client,
    pushes_url: String,
    config: PushbulletConfig,
}

impl PushbulletClient {
    pub fn new(config: PushbulletConfig) -> Self {
        Self::with_endpoint(config, PUSHBULLET_PUSHES_URL)
    }

    pub fn with_endpoint(config: PushbulletConfig, pushes_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            pushes_url: pushes_url.into(),
            config,
        }
    }

    /// Posts a note push to the configured channel. Only transport failures
    /// are errors; any answer from the service becomes a [`PushOutcome`].
    pub async fn push(&self, notification: &Notification) -> Result<PushOutcome> {
        let payload = PushRequest {
            channel_tag: &self.config.channel,
            kind: "note",
            title: &notification.title,
            body: &notification.body,
        };

        let resp = self
            .http
            .post(&self.pushes_url)
            .basic_auth(&self.config.access_token, Some(""))
            .json(&payload)
            .send()
            .await
            .context("pushbullet POST failed")?;

        let status = resp.status();
        if status == StatusCode::OK {
            return Ok(PushOutcome::Delivered);
        }

        let text = resp
            .text()
            .await
            .unwrap_or_else(|error| format!("<unreadable body: {error}>"));

        Ok(PushOutcome::Rejected {
            status,
            message: rejection_message(&text),
        })
    }
}

#[async_trait]
impl Notifier for PushbulletClient {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        match self.push(notification).await? {
            PushOutcome::Delivered => {
                debug!(channel = %self.config.channel, "push delivered");
            }
            PushOutcome::Rejected { status, message } => {
                error!(%status, "{message}");
            }
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct PushRequest<'a> {
    channel_tag: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    title: &'a str,
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// The service's `error.message`, or the raw body when it is not in that shape.
fn rejection_message(text: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(text) {
        Ok(parsed) => parsed.error.message,
        Err(_) => text.to_string(),
    }
}
