use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::errors::ProductError;
use super::model::Product;

/// Category value meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "all";

/// Number of products returned by the featured listing when no limit is given.
pub const DEFAULT_FEATURED_LIMIT: i64 = 8;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    /// Keeps store order.
    #[default]
    Default,
}

impl SortOrder {
    /// Parses the public sort key. Unknown keys fall back to [`SortOrder::Default`].
    pub fn parse(value: &str) -> Self {
        match value {
            "name-asc" => SortOrder::NameAsc,
            "name-desc" => SortOrder::NameDesc,
            "price-asc" => SortOrder::PriceAsc,
            "price-desc" => SortOrder::PriceDesc,
            _ => SortOrder::Default,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::NameAsc => write!(f, "name-asc"),
            SortOrder::NameDesc => write!(f, "name-desc"),
            SortOrder::PriceAsc => write!(f, "price-asc"),
            SortOrder::PriceDesc => write!(f, "price-desc"),
            SortOrder::Default => write!(f, "default"),
        }
    }
}

/// Filter and sort parameters for a catalog listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    /// `None` and `Some("all")` both disable the category filter.
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: SortOrder,
    pub visible_only: bool,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category: None,
            min_price: None,
            max_price: None,
            sort: SortOrder::Default,
            visible_only: true,
        }
    }
}

impl ProductQuery {
    fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|category| *category != ALL_CATEGORIES)
    }
}

/// Result of a text search, carrying the normalised query back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub query: String,
    pub results: Vec<Product>,
}

/// Applies a [`ProductQuery`] to the catalog.
///
/// Pipeline, in this order:
/// 1. drop hidden products when `visible_only` is set
/// 2. keep exact (case-sensitive) category matches unless the category is `all`
/// 3. drop products cheaper than `min_price` (bound inclusive)
/// 4. drop products pricier than `max_price` (bound inclusive)
/// 5. sort; ties keep their relative input order
pub fn filter_products(products: Vec<Product>, query: &ProductQuery) -> Vec<Product> {
    let category = query.category_filter();

    let mut selected: Vec<Product> = products
        .into_iter()
        .filter(|p| !query.visible_only || p.visible)
        .filter(|p| category.is_none_or(|c| p.category_or_empty() == c))
        .filter(|p| query.min_price.is_none_or(|min| p.price.as_f64() >= min))
        .filter(|p| query.max_price.is_none_or(|max| p.price.as_f64() <= max))
        .collect();

    sort_products(&mut selected, query.sort);
    selected
}

/// Sorts in place. `sort_by` is stable, and descending orders compare with
/// swapped operands instead of reversing, so equal keys never change places.
pub fn sort_products(products: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::NameAsc => products.sort_by(|a, b| compare_names(a, b)),
        SortOrder::NameDesc => products.sort_by(|a, b| compare_names(b, a)),
        SortOrder::PriceAsc => products.sort_by(|a, b| compare_prices(a, b)),
        SortOrder::PriceDesc => products.sort_by(|a, b| compare_prices(b, a)),
        SortOrder::Default => {}
    }
}

fn compare_names(a: &Product, b: &Product) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn compare_prices(a: &Product, b: &Product) -> Ordering {
    a.price.total_cmp(&b.price)
}

/// Case-insensitive substring search over name, code and description.
///
/// Only visible products are eligible. A blank query is rejected with
/// [`ProductError::EmptyQuery`] rather than matching nothing.
pub fn search_products(products: Vec<Product>, query: &str) -> Result<SearchOutcome, ProductError> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(ProductError::EmptyQuery);
    }

    let results = products
        .into_iter()
        .filter(|p| p.visible)
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.code.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .collect();

    Ok(SearchOutcome {
        query: needle,
        results,
    })
}

/// Leading visible products in store order.
///
/// A non-negative `limit` keeps at most that many. A negative one counts from
/// the end: `-1` keeps every visible product but the last, and a magnitude
/// beyond the number of visible products keeps nothing.
pub fn featured_products(products: Vec<Product>, limit: i64) -> Vec<Product> {
    let mut visible: Vec<Product> = products.into_iter().filter(|p| p.visible).collect();
    let keep = if limit >= 0 {
        usize::try_from(limit).unwrap_or(usize::MAX)
    } else {
        let dropped = usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX);
        visible.len().saturating_sub(dropped)
    };
    visible.truncate(keep);
    visible
}

/// Distinct categories of visible products, sorted.
pub fn list_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .filter(|p| p.visible)
        .map(|p| p.category_or_default().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
