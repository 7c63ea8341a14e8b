//! Stock availability pass

use super::Catalog;
use crate::config::StockPolicy;
use crate::models::StockListing;
use std::collections::HashSet;

/// Result of merging one stock pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockMerge {
    /// Entries flagged in stock
    pub flagged: usize,
    /// Stock titles with no catalog entry (skipped)
    pub unknown: usize,
}

/// Apply the stock policy before the stock pass runs
///
/// Only [`StockPolicy::ResetAll`] touches the catalog here; the other
/// policies are applied while reconciling.
pub fn prepare_stock_pass(catalog: &mut Catalog, policy: StockPolicy) {
    if policy == StockPolicy::ResetAll {
        let mut cleared = 0;
        for entry in catalog.iter_mut().filter(|e| e.stock) {
            entry.stock = false;
            cleared += 1;
        }
        log::debug!("Cleared stock flag on {} entries", cleared);
    }
}

/// Flag every catalog entry named by the stock pass as in stock
///
/// Titles the price pass never produced are skipped; the stock pass never
/// creates entries. A title listed twice is counted once. All fields other
/// than `stock` are left untouched.
pub fn merge_stock<'a>(
    catalog: &mut Catalog,
    listings: impl IntoIterator<Item = &'a StockListing>,
) -> StockMerge {
    let mut merge = StockMerge::default();
    let mut seen = HashSet::new();

    for listing in listings {
        if !seen.insert(listing.title.as_str()) {
            log::debug!("Duplicate in-stock title '{}', skipping", listing.title);
            continue;
        }
        match catalog.get_mut(&listing.title) {
            Some(entry) => {
                entry.stock = true;
                merge.flagged += 1;
            }
            None => {
                log::debug!("In-stock title '{}' not in catalog, skipping", listing.title);
                merge.unknown += 1;
            }
        }
    }

    merge
}
