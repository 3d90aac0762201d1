//! Lenient query-string parsing for the catalog routes.
//!
//! Malformed values never fail the request: they fall back to the same
//! result as an absent parameter.

use business::domain::product::query::{DEFAULT_FEATURED_LIMIT, ProductQuery, SortOrder};

/// Unparseable prices are ignored.
pub fn parse_price(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
}

/// Absent means true; otherwise only a case-insensitive `true` enables it.
pub fn parse_visible(raw: Option<&str>) -> bool {
    raw.is_none_or(|value| value.eq_ignore_ascii_case("true"))
}

/// Unparseable limits fall back to the default. Negative ones pass through.
pub fn parse_limit(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_FEATURED_LIMIT)
}

/// Path ids are plain decimal digits: no sign, no whitespace.
pub fn parse_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

pub fn build_query(
    category: Option<String>,
    min_price: Option<&str>,
    max_price: Option<&str>,
    sort: Option<&str>,
    visible: Option<&str>,
) -> ProductQuery {
    ProductQuery {
        category,
        min_price: parse_price(min_price),
        max_price: parse_price(max_price),
        sort: sort.map(SortOrder::parse).unwrap_or_default(),
        visible_only: parse_visible(visible),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_ignore_unparseable_prices() {
        assert_eq!(parse_price(Some("12.5")), Some(12.5));
        assert_eq!(parse_price(Some("cheap")), None);
        assert_eq!(parse_price(None), None);
    }

    #[test]
    fn should_enable_visibility_filter_only_for_true() {
        assert!(parse_visible(None));
        assert!(parse_visible(Some("TRUE")));
        assert!(!parse_visible(Some("false")));
        assert!(!parse_visible(Some("1")));
    }

    #[test]
    fn should_fall_back_to_default_limit_only_when_unparseable() {
        assert_eq!(parse_limit(Some("3")), 3);
        assert_eq!(parse_limit(Some("-2")), -2);
        assert_eq!(parse_limit(Some("many")), DEFAULT_FEATURED_LIMIT);
        assert_eq!(parse_limit(None), DEFAULT_FEATURED_LIMIT);
    }

    #[test]
    fn should_accept_only_unsigned_decimal_ids() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("007"), Some(7));
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("+1"), None);
        assert_eq!(parse_id(" 1"), None);
        assert_eq!(parse_id("1.5"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn should_build_query_from_raw_parameters() {
        let query = build_query(
            Some("audio".to_string()),
            Some("10"),
            Some("oops"),
            Some("price-desc"),
            Some("false"),
        );

        assert_eq!(query.category.as_deref(), Some("audio"));
        assert_eq!(query.min_price, Some(10.0));
        assert_eq!(query.max_price, None);
        assert_eq!(query.sort, SortOrder::PriceDesc);
        assert!(!query.visible_only);
    }
}
