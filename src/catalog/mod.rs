//! Catalog reconciliation: lowest-price tracking, stock merge, ordering

mod reconcile;
mod sort;
mod stats;
mod stock;

pub use reconcile::{classify, reconcile, Reconciler, Reconciliation};
pub use sort::{actionable, compare_by_price, sort};
pub use stats::RunStatistics;
pub use stock::{merge_stock, prepare_stock_pass, StockMerge};

use crate::error::{Error, Result};
use crate::models::CatalogEntry;
use std::collections::HashMap;

/// All known titles, keyed by title
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from persisted records
    ///
    /// Every record must carry a non-empty title and titles must be unique;
    /// anything else means the file cannot be reconciled against.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut map = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            if entry.title.trim().is_empty() {
                return Err(Error::MissingTitle { index });
            }
            if map.contains_key(&entry.title) {
                return Err(Error::DuplicateTitle(entry.title));
            }
            map.insert(entry.title.clone(), entry);
        }

        Ok(Self { entries: map })
    }

    /// Look up an entry by exact title
    pub fn get(&self, title: &str) -> Option<&CatalogEntry> {
        self.entries.get(title)
    }

    pub(crate) fn get_mut(&mut self, title: &str) -> Option<&mut CatalogEntry> {
        self.entries.get_mut(title)
    }

    /// Store `entry` under its title, returning the entry it replaced
    pub(crate) fn replace(&mut self, entry: CatalogEntry) -> Option<CatalogEntry> {
        self.entries.insert(entry.title.clone(), entry)
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut CatalogEntry> {
        self.entries.values_mut()
    }

    /// Consume the catalog, yielding its entries (unordered)
    pub fn into_entries(self) -> impl Iterator<Item = CatalogEntry> {
        self.entries.into_values()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
