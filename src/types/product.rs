use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Product {
    name: &'static str,
    id: &'static str,
}

impl Product {
    pub const fn new(name: &'static str, id: &'static str) -> Self {
        Self { name, id }
    }

    /// Human readable name used in notifications and logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Store identifier, substituted into the product page URL.
    pub fn id(&self) -> &'static str {
        self.id
    }
}

/// Products watched by the monitor, in the order they are polled.
pub const PRODUCTS: &[Product] = &[
    Product::new("Nexus 6 White 32GB", "nexus_6_white_32gb"),
    Product::new("Nexus 6 Blue 32GB", "nexus_6_blue_32gb"),
    Product::new("Nexus 6 White 64GB", "nexus_6_white_64gb"),
    Product::new("Nexus 6 Blue 64GB", "nexus_6_blue_64gb"),
];

impl fmt::Display for Product {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.name)
    }
}

impl fmt::Debug for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product({} [{}])", self.name, self.id)
    }
}
