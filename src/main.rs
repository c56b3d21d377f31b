mod inventory;
mod monitor;
mod notify;
mod scenario;
mod store;
mod types;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use crate::monitor::monitor::Monitor;
use crate::monitor::pacing::{DEFAULT_PASS_INTERVAL_SECS, Pacing};
use crate::scenario::notifiers::NotifierKind;
use crate::scenario::scenario::Scenario;
use crate::store::store_client::StoreClient;
use crate::types::product::PRODUCTS;

/// Monitors Nexus 6 product pages for inventory updates
#[derive(Debug, Clone, Parser)]
#[command(version)]
struct Args {
    /// Pushbullet channel to push notifications to
    #[arg(value_name = "CHANNEL", env = "PUSHBULLET_CHANNEL")]
    pub channel: Option<String>,

    /// Pushbullet access token for authentication
    #[arg(
        value_name = "ACCESS_TOKEN",
        env = "PUSHBULLET_ACCESS_TOKEN",
        hide_env_values = true
    )]
    pub access_token: Option<String>,

    /// Time between successive checks (in seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_PASS_INTERVAL_SECS)]
    pub interval: u64,

    /// Enable debug logs
    #[arg(long)]
    pub debug: bool,

    #[arg(long, value_enum, default_value = "pushbullet")]
    pub notifier: NotifierKind,

    /// Exit on the first failed page check instead of logging it and continuing
    #[arg(long)]
    pub fail_fast: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();

    let args = Args::parse();
    init_tracing(args.debug)?;

    let notifier = Scenario::notifier(args.notifier, args.channel, args.access_token)?;
    let store = StoreClient::play_store()?;

    let mut monitor = Monitor::new(
        PRODUCTS,
        Box::new(store),
        notifier,
        Pacing::from_secs(args.interval),
    )
    .with_fail_fast(args.fail_fast);

    monitor.run().await
}

fn init_tracing(debug: bool) -> Result<()> {
    let level = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("stock_watch={level}").parse()?)
                .add_directive("reqwest=warn".parse()?)
                .add_directive("hyper=warn".parse()?)
                .add_directive("hyper_util=warn".parse()?)
                .add_directive("rustls=warn".parse()?)
                .add_directive("html5ever=warn".parse()?)
                .add_directive("selectors=warn".parse()?),
        )
        .with_target(true)
        .init();

    Ok(())
}
