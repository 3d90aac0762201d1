use std::cmp::Ordering;

use serde_json::Number;

/// Catalog price, kept as the JSON number it was stored as.
///
/// `10` and `10.0` stay distinct so a load followed by a save writes the
/// catalog back unchanged. Comparisons go through [`Price::as_f64`].
#[derive(Debug, Clone, PartialEq)]
pub struct Price(Number);

impl Price {
    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or(0.0)
    }

    pub fn as_number(&self) -> &Number {
        &self.0
    }

    pub fn total_cmp(&self, other: &Price) -> Ordering {
        self.as_f64().total_cmp(&other.as_f64())
    }
}

impl Default for Price {
    fn default() -> Self {
        Price(Number::from(0))
    }
}

impl From<Number> for Price {
    fn from(number: Number) -> Self {
        Price(number)
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Price(Number::from(value))
    }
}

/// Non-finite values have no JSON form and become zero.
impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map(Price).unwrap_or_default()
    }
}

impl From<Price> for Number {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_integer_and_float_forms_apart() {
        let integer = Price::from(10i64);
        let float = Price::from(10.0);

        assert_ne!(integer, float);
        assert_eq!(integer.to_string(), "10");
        assert_eq!(float.to_string(), "10.0");
        assert_eq!(integer.total_cmp(&float), Ordering::Equal);
    }

    #[test]
    fn should_map_non_finite_values_to_zero() {
        assert_eq!(Price::from(f64::NAN), Price::default());
        assert_eq!(Price::from(f64::INFINITY).as_f64(), 0.0);
    }
}
