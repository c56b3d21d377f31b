use anyhow::Result;
use tracing::{debug, error, info};

use crate::inventory::InventorySource;
use crate::inventory::inventory_cache::{InventoryCache, Observation};
use crate::monitor::pacing::Pacing;
use crate::notify::DynamicNotifier;
use crate::types::notification::Notification;
use crate::types::product::Product;

pub type DynamicInventorySource = Box<dyn InventorySource + Send + Sync>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassReport {
    pub checked: usize,
    pub changes: usize,
    pub failures: usize,
}

/// Polls every product in turn and notifies when its inventory text changes.
pub struct Monitor {
    products: &'static [Product],
    source: DynamicInventorySource,
    notifier: DynamicNotifier,
    cache: InventoryCache,
    pacing: Pacing,
    fail_fast: bool,
}

impl Monitor {
    pub fn new(
        products: &'static [Product],
        source: DynamicInventorySource,
        notifier: DynamicNotifier,
        pacing: Pacing,
    ) -> Self {
        Self {
            products,
            source,
            notifier,
            cache: InventoryCache::new(),
            pacing,
            fail_fast: false,
        }
    }

    /// Stop on the first failed product check instead of logging it and
    /// moving on to the next product.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn cache(&self) -> &InventoryCache {
        &self.cache
    }

    /// Runs passes forever. Only returns when a check fails in fail-fast mode.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            products = self.products.len(),
            pass_interval = ?self.pacing.pass_interval,
            min_cycle = ?self.pacing.min_cycle_duration(self.products.len()),
            fail_fast = self.fail_fast,
            "starting inventory monitor"
        );

        loop {
            self.run_cycle().await?;
        }
    }

    /// One pass over all products followed by the pass interval.
    pub async fn run_cycle(&mut self) -> Result<PassReport> {
        let report = self.run_pass().await?;
        debug!(
            checked = report.checked,
            changes = report.changes,
            failures = report.failures,
            tracked = self.cache().len(),
            "pass complete"
        );

        self.pacing.after_pass().await;

        Ok(report)
    }

    pub async fn run_pass(&mut self) -> Result<PassReport> {
        debug!("checking all products");

        let products = self.products;
        let mut report = PassReport::default();

        for product in products {
            debug!(
                product = %product,
                previous = ?self.cache.get(product.id()),
                "checking product"
            );

            match self.check_product(product).await {
                Ok(changed) => {
                    if changed {
                        report.changes += 1;
                    }
                }
                Err(error) if self.fail_fast => {
                    return Err(error.context(format!("inventory check failed for {product}")));
                }
                Err(error) => {
                    report.failures += 1;
                    error!(product = %product, "inventory check failed: {error:#}");
                }
            }
            report.checked += 1;

            self.pacing.after_product().await;
        }

        Ok(report)
    }

    /// Fetches and records the product's inventory, notifying on change.
    /// Returns whether a change was detected.
    async fn check_product(&mut self, product: &Product) -> Result<bool> {
        let text = self.source.inventory_text(product).await?;
        let inventory = text.trim();

        let observation = self.cache.observe(product.id(), inventory.to_string());

        if let Observation::Changed { previous } = &observation {
            info!(product = %product, %previous, current = %inventory, "change detected in {product}");

            let notification = Notification::inventory_changed(product, inventory);
            if let Err(error) = self.notifier.notify(&notification).await {
                error!(product = %product, "notification failed: {error:#}");
            }
        }

        Ok(observation.is_change())
    }
}
