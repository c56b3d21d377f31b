use anyhow::Result;

use crate::{
    notify::{
        DynamicNotifier, dry_run::DryRunNotifier, pushbullet_client::PushbulletClient,
        pushbullet_config::PushbulletConfig,
    },
    scenario::notifiers::NotifierKind,
};

pub struct Scenario;

impl Scenario {
    pub fn notifier(
        kind: NotifierKind,
        channel: Option<String>,
        access_token: Option<String>,
    ) -> Result<DynamicNotifier> {
        tracing::info!(notifier = %kind, "creating notifier");

        let notifier: DynamicNotifier = match kind {
            NotifierKind::DryRun => Box::new(DryRunNotifier),
            NotifierKind::Pushbullet => {
                let config = PushbulletConfig::from_args(channel, access_token)?;
                tracing::debug!(?config, "pushbullet configured");

                Box::new(PushbulletClient::new(config))
            }
        };

        Ok(notifier)
    }
}
