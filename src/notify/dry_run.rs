use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::notify::Notifier;
use crate::types::notification::Notification;

/// Logs notifications instead of sending them anywhere.
#[derive(Debug, Default)]
pub struct DryRunNotifier;

#[async_trait]
impl Notifier for DryRunNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        info!(title = %notification.title, body = %notification.body, "dry run, notification not sent");

        Ok(())
    }
}
