use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use business::domain::product::model::Product;
use business::domain::product::value_objects::Price;

/// On-disk shape of a catalog record.
///
/// Only `id` is required; every other known field falls back to its default,
/// whether the key is absent or explicitly `null`. Fields the storefront does
/// not know about are carried in `attributes` so a load followed by a save
/// leaves them untouched.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Kept as the stored number so `10` is not rewritten as `10.0`.
    #[serde(default = "zero_price", deserialize_with = "null_as_zero_price")]
    pub price: Number,
    /// An explicit `null` reads as false, an absent key as true.
    #[serde(default = "default_visible", deserialize_with = "null_as_default")]
    pub visible: bool,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

fn default_visible() -> bool {
    true
}

fn zero_price() -> Number {
    Number::from(0)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_zero_price<'de, D>(deserializer: D) -> Result<Number, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Number>::deserialize(deserializer)?.unwrap_or_else(zero_price))
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            code: self.code,
            description: self.description,
            category: self.category,
            price: Price::from(self.price),
            visible: self.visible,
            attributes: self.attributes.into_iter().collect(),
        }
    }

    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            code: product.code.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product.price.as_number().clone(),
            visible: product.visible,
            attributes: product
                .attributes
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }
}
