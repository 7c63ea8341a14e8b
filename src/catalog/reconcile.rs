//! Folding observed listings into the catalog

use super::{Catalog, RunStatistics};
use crate::config::{ReconcileConfig, StockPolicy};
use crate::models::{CatalogEntry, Listing, Status};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Result of reconciling one listing
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub status: Status,
    /// The entry this reconciliation replaced, if the title was known
    pub replaced: Option<CatalogEntry>,
}

/// Classify an observed price against the prior entry for its title
///
/// A missing prior lowest is beaten by any observed price; a missing
/// observed price never beats anything.
pub fn classify(prior: Option<&CatalogEntry>, price: Option<f64>) -> Status {
    let Some(prior) = prior else {
        return Status::New;
    };

    match (price, prior.lowest) {
        (Some(price), Some(lowest)) if price < lowest => Status::Updated,
        (Some(price), Some(lowest)) if price == lowest => Status::Par,
        (Some(_), None) => Status::Par,
        _ => Status::Unchanged,
    }
}

/// Reconcile one listing against the catalog and store the resulting entry
///
/// The previous entry for the title is replaced wholesale. `today` is the
/// run date written to `last_time_updated` when the lowest price moves.
pub fn reconcile(
    catalog: &mut Catalog,
    listing: Listing,
    today: NaiveDate,
    config: &ReconcileConfig,
) -> Reconciliation {
    let prior = catalog.get(&listing.title);
    let status = classify(prior, listing.price);

    let (lowest, last_updated) = match status {
        Status::New | Status::Updated | Status::Par => (listing.price, Some(today)),
        Status::Unchanged => prior
            .map(|p| (p.lowest, p.last_updated))
            .unwrap_or((None, Some(today))),
    };

    let stock = match (prior, config.stock_policy) {
        (Some(prior), StockPolicy::Sticky) => prior.stock,
        _ => false,
    };

    let kind = listing
        .kind
        .filter(|k| !k.trim().is_empty())
        .unwrap_or_else(|| config.default_kind.clone());

    let entry = CatalogEntry {
        title: listing.title,
        kind,
        discount: listing.discount,
        price: listing.price,
        lowest,
        stock,
        status: Some(status),
        last_updated,
    };

    log::debug!("{} [{}]", entry, status);

    let replaced = catalog.replace(entry);
    Reconciliation { status, replaced }
}

/// Reconciles a whole price pass, keeping the run's statistics
///
/// Listings with an empty title, and repeats of a title already seen in
/// this pass, are skipped with a warning. The first occurrence wins.
pub struct Reconciler<'a> {
    config: &'a ReconcileConfig,
    today: NaiveDate,
    stats: RunStatistics,
    seen: HashSet<String>,
}

impl<'a> Reconciler<'a> {
    pub fn new(config: &'a ReconcileConfig, today: NaiveDate) -> Self {
        Self {
            config,
            today,
            stats: RunStatistics::default(),
            seen: HashSet::new(),
        }
    }

    /// Reconcile a single listing; `None` when it was skipped
    pub fn reconcile(&mut self, catalog: &mut Catalog, listing: Listing) -> Option<Reconciliation> {
        if listing.title.trim().is_empty() {
            log::warn!("Skipping listing without a title (price: {:?})", listing.price);
            self.stats.skipped += 1;
            return None;
        }

        if !self.seen.insert(listing.title.clone()) {
            log::warn!("Skipping repeated listing for '{}'", listing.title);
            self.stats.skipped += 1;
            return None;
        }

        let result = reconcile(catalog, listing, self.today, self.config);
        self.stats.record(result.status);
        Some(result)
    }

    /// Reconcile every listing of a pass
    pub fn reconcile_all(
        &mut self,
        catalog: &mut Catalog,
        listings: impl IntoIterator<Item = Listing>,
    ) {
        for listing in listings {
            self.reconcile(catalog, listing);
        }
    }

    pub fn stats(&self) -> &RunStatistics {
        &self.stats
    }

    /// Finish the pass and hand back its statistics
    pub fn finish(self) -> RunStatistics {
        self.stats
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
