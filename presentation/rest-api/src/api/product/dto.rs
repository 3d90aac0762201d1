use poem_openapi::Object;
use serde_json::{Map, Value};

use business::domain::product::model::Product;
use business::domain::product::query::SearchOutcome;

/// Serialises a product as one flat JSON object.
///
/// Stored extras (`image`, `specs`, ...) sit next to the known fields, the
/// way the record looks in the catalog file. Known fields win on a clash.
/// `category` is omitted when the record has none.
pub fn product_json(product: Product) -> Value {
    let mut record: Map<String, Value> = product.attributes.into_iter().collect();
    record.insert("id".to_string(), Value::from(product.id));
    record.insert("name".to_string(), Value::from(product.name));
    record.insert("code".to_string(), Value::from(product.code));
    record.insert("description".to_string(), Value::from(product.description));
    match product.category {
        Some(category) => record.insert("category".to_string(), Value::from(category)),
        None => record.remove("category"),
    };
    record.insert("price".to_string(), Value::Number(product.price.into()));
    record.insert("visible".to_string(), Value::from(product.visible));
    Value::Object(record)
}

fn products_json(products: Vec<Product>) -> Vec<Value> {
    products.into_iter().map(product_json).collect()
}

/// Listing envelope for `/api/products` and `/api/products/featured`.
#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    pub success: bool,
    pub count: usize,
    /// Catalog records: id, name, code, description, category, price,
    /// visible, plus any stored extras
    pub products: Vec<Value>,
}

impl From<Vec<Product>> for ProductListResponse {
    fn from(products: Vec<Product>) -> Self {
        Self {
            success: true,
            count: products.len(),
            products: products_json(products),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductDetailResponse {
    pub success: bool,
    /// Catalog record, flat, including stored extras
    pub product: Value,
}

#[derive(Debug, Clone, Object)]
pub struct CategoryListResponse {
    pub success: bool,
    /// Sorted, distinct categories of visible products
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SearchResultsResponse {
    pub success: bool,
    /// Query as matched: trimmed and lowercased
    pub query: String,
    pub count: usize,
    pub results: Vec<Value>,
}

impl From<SearchOutcome> for SearchResultsResponse {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            success: true,
            query: outcome.query,
            count: outcome.results.len(),
            results: products_json(outcome.results),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_place_stored_extras_next_to_known_fields() {
        let mut product = Product::new(7, "Robot Vacuum", 10i64).with_category("home");
        product
            .attributes
            .insert("image".to_string(), json!("/static/images/vacuum.png"));

        let record = product_json(product);

        assert_eq!(
            record,
            json!({
                "id": 7,
                "name": "Robot Vacuum",
                "code": "",
                "description": "",
                "category": "home",
                "price": 10,
                "visible": true,
                "image": "/static/images/vacuum.png"
            })
        );
    }

    #[test]
    fn should_omit_missing_category() {
        let record = product_json(Product::new(1, "Gift Card", 25.0));

        assert!(record.get("category").is_none());
        assert_eq!(record["price"], json!(25.0));
    }
}
