//! Catalog Sync - Game Deals Price History
//!
//! Scrapes the storefront, reconciles prices against the saved catalog and
//! writes the catalog plus its par/updated subset. Runs once, or on a fixed
//! interval in daemon mode.

use catalog_sync::config::{default_data_dir, ReconcileConfig, SourceConfig, DEFAULT_SEARCH_URL};
use catalog_sync::{
    report, run_every, run_once, today_in, CatalogStore, StockPolicy, StoreConfig,
    StorefrontClient, TrackerConfig,
};
use chrono_tz::Tz;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Game deals tracker - records lowest prices from storefront searches
#[derive(Parser, Debug)]
#[command(name = "catalog_sync")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding games.json and games_par_or_updated.json
    #[arg(short, long, default_value_os_t = default_data_dir())]
    data_dir: PathBuf,

    /// Storefront search URL (without instock/page parameters)
    #[arg(long, default_value = DEFAULT_SEARCH_URL)]
    search_url: String,

    /// How stock flags are cleared: reset-listed, sticky or reset-all
    #[arg(long, default_value_t = StockPolicy::ResetListed)]
    stock_policy: StockPolicy,

    /// Kind recorded for listings without a category tag
    #[arg(long, default_value = "game")]
    default_kind: String,

    /// Timezone deciding the run date
    #[arg(long, default_value_t = chrono_tz::Europe::Rome)]
    timezone: Tz,

    /// Run once and exit (default: run continuously on an interval)
    #[arg(long, default_value_t = false)]
    once: bool,

    /// Hours between runs when running continuously
    #[arg(long, default_value_t = 24)]
    interval_hours: u64,

    /// Reconcile and report without writing any file
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

impl Args {
    fn into_config(self) -> TrackerConfig {
        TrackerConfig {
            reconcile: ReconcileConfig {
                default_kind: self.default_kind,
                stock_policy: self.stock_policy,
            },
            store: StoreConfig::in_dir(&self.data_dir),
            source: SourceConfig {
                search_url: self.search_url,
                ..SourceConfig::default()
            },
            timezone: self.timezone,
            dry_run: self.dry_run,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let once = args.once;
    let interval_hours = args.interval_hours.max(1);
    let config = args.into_config();

    log::info!("Starting catalog_sync...");
    log::info!("Catalog path: {}", config.store.catalog_path.display());
    log::info!("Stock policy: {}", config.reconcile.stock_policy);

    let store = CatalogStore::new(&config.store);
    let source = StorefrontClient::new(&config.source);

    if once {
        if !run_sync(&source, &store, &config).await {
            std::process::exit(1);
        }
    } else {
        log::info!(
            "Running in daemon mode, syncing every {} hour(s)",
            interval_hours
        );
        run_daemon(&source, &store, &config, interval_hours).await;
    }
}

/// Run the sync daemon - one run per interval, starting immediately, until Ctrl-C
async fn run_daemon(
    source: &StorefrontClient,
    store: &CatalogStore,
    config: &TrackerConfig,
    interval_hours: u64,
) {
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
        log::info!("Received Ctrl-C, shutting down");
    };

    run_every(Duration::from_secs(interval_hours * 3600), shutdown, || async move {
        log::info!("Scheduled run triggered");
        run_sync(source, store, config).await;
    })
    .await;
}

/// Run a single sync; returns false if the run failed
async fn run_sync(source: &StorefrontClient, store: &CatalogStore, config: &TrackerConfig) -> bool {
    let today = today_in(config.timezone);

    match run_once(source, store, config, today).await {
        Ok(summary) => {
            println!("{}", report::summary(&summary));
            log::info!("Sync completed successfully.");
            true
        }
        Err(e) => {
            log::error!("Sync failed, catalog left unchanged: {}", e);
            false
        }
    }
}
