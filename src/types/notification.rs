use crate::types::product::Product;

const PAGE_CHANGED_TITLE: &str = "Page Content Has Changed!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn inventory_changed(product: &Product, inventory: &str) -> Self {
        Self::new(
            PAGE_CHANGED_TITLE,
            format!(
                "The inventory of the {} now states: \"{inventory}\"",
                product.name()
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::product::PRODUCTS;

    #[test]
    fn inventory_changed_embeds_name_and_text() {
        let notification = Notification::inventory_changed(&PRODUCTS[0], "Out of stock");

        assert_eq!(notification.title, "Page Content Has Changed!");
        assert_eq!(
            notification.body,
            "The inventory of the Nexus 6 White 32GB now states: \"Out of stock\""
        );
    }
}
