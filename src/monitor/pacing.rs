use std::time::Duration;

/// Delay between two product fetches within a pass.
pub const PRODUCT_DELAY: Duration = Duration::from_secs(1);

pub const DEFAULT_PASS_INTERVAL_SECS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub product_delay: Duration,
    pub pass_interval: Duration,
}

impl Pacing {
    pub fn new(pass_interval: Duration) -> Self {
        Self {
            product_delay: PRODUCT_DELAY,
            pass_interval,
        }
    }

    pub fn from_secs(pass_interval_secs: u64) -> Self {
        Self::new(Duration::from_secs(pass_interval_secs))
    }

    /// Lower bound on the wall time of one full cycle over `products` items.
    pub fn min_cycle_duration(&self, products: usize) -> Duration {
        self.product_delay * products as u32 + self.pass_interval
    }

    pub async fn after_product(&self) {
        tokio::time::sleep(self.product_delay).await;
    }

    pub async fn after_pass(&self) {
        tokio::time::sleep(self.pass_interval).await;
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_secs(DEFAULT_PASS_INTERVAL_SECS)
    }
}
