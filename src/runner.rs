//! One complete tracking run
//!
//! Load → price pass → reconcile → stock pass → merge → sort → persist.
//! Any failure before the final write leaves the previous files untouched.

use crate::catalog::{
    actionable, merge_stock, prepare_stock_pass, sort, Catalog, Reconciler, RunStatistics,
};
use crate::config::TrackerConfig;
use crate::error::Result;
use crate::models::DATE_FORMAT;
use crate::source::ListingSource;
use crate::store::CatalogStore;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use std::future::Future;
use std::time::{Duration, Instant};

/// What a finished run did
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_date: NaiveDate,
    pub stats: RunStatistics,
    /// Entries in the catalog after the run
    pub catalog_size: usize,
    /// Entries in the par/updated subset
    pub actionable: usize,
    /// False for dry runs
    pub persisted: bool,
    pub elapsed: Duration,
}

/// Today's date in the given timezone, independent of the host's local time
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Call `job` once per `period`, starting immediately, until `shutdown` completes
///
/// A job in progress always finishes; a shutdown that arrives during it
/// stops the loop before the next tick.
pub async fn run_every<F, Fut>(period: Duration, shutdown: impl Future<Output = ()>, mut job: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut ticker = tokio::time::interval(period);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => break,
            _ = ticker.tick() => job().await,
        }
    }
}

/// Run one reconciliation against `source` and persist the result to `store`
pub async fn run_once<S: ListingSource>(
    source: &S,
    store: &CatalogStore,
    config: &TrackerConfig,
    today: NaiveDate,
) -> Result<RunSummary> {
    let started = Instant::now();
    log::info!("Starting run for {}", today.format(DATE_FORMAT));

    let mut catalog = Catalog::from_entries(store.load()?)?;
    let known = catalog.len();

    let listings = source.price_listings(&config.source.search_url).await?;
    log::info!(
        "Reconciling {} listings against {} known titles",
        listings.len(),
        known
    );

    let mut reconciler = Reconciler::new(&config.reconcile, today);
    reconciler.reconcile_all(&mut catalog, listings);
    let mut stats = reconciler.finish();

    prepare_stock_pass(&mut catalog, config.reconcile.stock_policy);
    let in_stock = source.stock_listings(&config.source.search_url).await?;
    let merge = merge_stock(&mut catalog, &in_stock);
    stats.in_stock = merge.flagged;
    stats.unknown_stock = merge.unknown;
    if merge.unknown > 0 {
        log::warn!(
            "{} in-stock titles were missing from the price pass",
            merge.unknown
        );
    }

    let sorted = sort(catalog);
    let filtered = actionable(&sorted);

    let persisted = if config.dry_run {
        log::info!("Dry run: not writing {}", store.catalog_path().display());
        false
    } else {
        store.save(&sorted)?;
        store.save_filtered(&filtered)?;
        true
    };

    Ok(RunSummary {
        run_date: today,
        stats,
        catalog_size: sorted.len(),
        actionable: filtered.len(),
        persisted,
        elapsed: started.elapsed(),
    })
}
