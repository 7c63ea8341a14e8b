//! Catalog ordering and the par/updated subset

use super::Catalog;
use crate::models::CatalogEntry;
use std::cmp::Ordering;

/// Order two entries by price, ascending
///
/// Entries without a price sort last, as if priced at infinity. Equal
/// prices fall back to title so the order is total.
pub fn compare_by_price(a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
    let price_order = match (a.price, b.price) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    price_order.then_with(|| a.title.cmp(&b.title))
}

/// Consume the catalog into its persisted order
pub fn sort(catalog: Catalog) -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = catalog.into_entries().collect();
    entries.sort_by(compare_by_price);
    entries
}

/// Entries currently at or below their historical lowest, in input order
pub fn actionable(sorted: &[CatalogEntry]) -> Vec<CatalogEntry> {
    sorted
        .iter()
        .filter(|e| e.is_actionable())
        .cloned()
        .collect()
}
