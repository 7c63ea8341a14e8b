//! Catalog Sync - Game Deals Price History
//!
//! Scrapes storefront search listings, keeps each title's lowest-ever price
//! in a JSON catalog and classifies every run's prices against that history.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod runner;
pub mod source;
pub mod store;

pub use catalog::{Catalog, Reconciler, RunStatistics};
pub use config::{ReconcileConfig, SourceConfig, StockPolicy, StoreConfig, TrackerConfig};
pub use error::{CatalogError, Error, Result};
pub use models::{CatalogEntry, Listing, Status, StockListing};
pub use runner::{run_every, run_once, today_in, RunSummary};
pub use source::{ListingSource, StorefrontClient};
pub use store::CatalogStore;
