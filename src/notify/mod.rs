pub mod dry_run;
pub mod pushbullet_client;
pub mod pushbullet_config;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::notification::Notification;

pub type DynamicNotifier = Box<dyn Notifier + Send + Sync>;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers a notification. Rejections reported by the service are logged
    /// by the implementation; an error means nothing could be delivered at all.
    async fn notify(&self, notification: &Notification) -> Result<()>;
}
