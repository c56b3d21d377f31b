pub mod inventory_cache;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::product::Product;

#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Returns the raw inventory text currently shown for the product.
    async fn inventory_text(&self, product: &Product) -> Result<String>;
}
