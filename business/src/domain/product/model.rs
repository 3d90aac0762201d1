use std::collections::BTreeMap;

use serde_json::Value;

use super::value_objects::Price;

/// Category reported for products stored without one.
pub const DEFAULT_CATEGORY: &str = "other";

/// A catalog record.
///
/// Optional fields are already defaulted at the load boundary, so read sites
/// never deal with missing values. `category` stays optional because the
/// category listing reports absent categories as [`DEFAULT_CATEGORY`] while
/// filtering treats them as an empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: String,
    pub category: Option<String>,
    pub price: Price,
    pub visible: bool,
    /// Fields the storefront does not interpret (images, specs, ...).
    pub attributes: BTreeMap<String, Value>,
}

impl Product {
    /// Creates a visible product with no extra attributes.
    pub fn new(id: i64, name: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            id,
            name: name.into(),
            code: String::new(),
            description: String::new(),
            category: None,
            price: price.into(),
            visible: true,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Category used for exact-match filtering.
    pub fn category_or_empty(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Category used for the public category listing.
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_visible_product_by_default() {
        let product = Product::new(1, "Kettle", 39.9);

        assert!(product.visible);
        assert_eq!(product.code, "");
        assert!(product.attributes.is_empty());
    }

    #[test]
    fn should_report_missing_category_differently_for_filter_and_listing() {
        let product = Product::new(1, "Kettle", 39.9);

        assert_eq!(product.category_or_empty(), "");
        assert_eq!(product.category_or_default(), "other");
    }

    #[test]
    fn should_keep_explicit_category() {
        let product = Product::new(1, "Kettle", 39.9).with_category("kitchen");

        assert_eq!(product.category_or_empty(), "kitchen");
        assert_eq!(product.category_or_default(), "kitchen");
    }
}
