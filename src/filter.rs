//! Title search.
//!
//! A product is visible when its title contains the query, ignoring case
//! and the whitespace around the query.  The result keeps catalog order.

use crate::source::Product;

/// Derive the visible subset of `catalog` for `query`.
///
/// Pure: the same inputs always give the same output, and an empty or
/// whitespace-only query returns the whole catalog.
pub fn visible_products(catalog: &[Product], query: &str) -> Vec<Product> {
    let needle = normalize(query);
    if needle.is_empty() {
        return catalog.to_vec();
    }

    catalog
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}
