use anyhow::{Result, anyhow};
use scraper::{Html, Selector};

/// Reported in place of inventory text when the page has no inventory section.
pub const INVENTORY_REMOVED: &str = "[Inventory Removed]";

const INVENTORY_SELECTOR: &str = "div.inventory-info";

#[derive(Debug, Clone)]
pub struct InventoryExtractor {
    selector: Selector,
}

impl InventoryExtractor {
    pub fn new() -> Result<Self> {
        let selector = Selector::parse(INVENTORY_SELECTOR)
            .map_err(|error| anyhow!("invalid inventory selector {INVENTORY_SELECTOR}: {error}"))?;

        Ok(Self { selector })
    }

    /// Text of the first inventory element in `document`, untrimmed, or
    /// [`INVENTORY_REMOVED`] when there is none.
    pub fn extract(&self, document: &str) -> String {
        let html = Html::parse_document(document);

        match html.select(&self.selector).next() {
            Some(element) => element.text().collect(),
            None => INVENTORY_REMOVED.to_string(),
        }
    }
}
