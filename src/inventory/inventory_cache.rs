use std::collections::HashMap;

/// Result of recording an inventory observation against the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// No earlier value was known for the product.
    First,
    Unchanged,
    Changed { previous: String },
}

impl Observation {
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Last observed inventory text per product id. Lives for the process only.
#[derive(Debug, Default)]
pub struct InventoryCache {
    entries: HashMap<String, String>,
}

impl InventoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, product_id: &str) -> Option<&str> {
        self.entries.get(product_id).map(String::as_str)
    }

    /// Stores `inventory` as the latest value for `product_id`, overwriting any
    /// earlier one, and reports how it compares to what was there before.
    pub fn observe(&mut self, product_id: &str, inventory: String) -> Observation {
        let observation = match self.entries.get(product_id) {
            None => Observation::First,
            Some(previous) if *previous == inventory => Observation::Unchanged,
            Some(previous) => Observation::Changed {
                previous: previous.clone(),
            },
        };

        self.entries.insert(product_id.to_string(), inventory);

        observation
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
