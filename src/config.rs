//! Run configuration
//!
//! Every knob has a named field and a default; the binary maps its CLI
//! arguments onto [`TrackerConfig`].

use crate::models::DEFAULT_KIND;
use chrono_tz::Tz;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Storefront search page (Steam keys, EUR, 0-100 price range)
pub const DEFAULT_SEARCH_URL: &str = "https://www.instant-gaming.com/it/ricerca/?currency=EUR&platform%5B0%5D=1&type%5B0%5D=steam&sort_by=&min_reviewsavg=10&max_reviewsavg=100&noreviews=1&min_price=0&max_price=100&noprice=1&gametype=all&search_tags=0&query=";

pub const DEFAULT_USER_AGENT: &str = "catalog_sync/1.0";

/// Most search pages one pass may walk
pub const DEFAULT_MAX_PAGES: u32 = 500;

/// Full catalog file name
pub const CATALOG_FILE: &str = "games.json";

/// Actionable subset file name
pub const FILTERED_FILE: &str = "games_par_or_updated.json";

/// What happens to an entry's `stock` flag before the stock pass runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockPolicy {
    /// Entries reconciled in the price pass start out of stock
    #[default]
    ResetListed,
    /// Entries keep their previous flag until the stock pass sets it
    Sticky,
    /// Every catalog entry is cleared before the stock pass
    ResetAll,
}

impl StockPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockPolicy::ResetListed => "reset-listed",
            StockPolicy::Sticky => "sticky",
            StockPolicy::ResetAll => "reset-all",
        }
    }
}

impl fmt::Display for StockPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reset-listed" | "reset_listed" => Ok(StockPolicy::ResetListed),
            "sticky" => Ok(StockPolicy::Sticky),
            "reset-all" | "reset_all" => Ok(StockPolicy::ResetAll),
            other => Err(format!(
                "unknown stock policy '{other}' (expected reset-listed, sticky or reset-all)"
            )),
        }
    }
}

/// Defaults applied while folding listings into the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileConfig {
    /// Kind recorded when a listing carries no category tag
    pub default_kind: String,
    pub stock_policy: StockPolicy,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            default_kind: DEFAULT_KIND.to_string(),
            stock_policy: StockPolicy::default(),
        }
    }
}

/// Where the catalog files live
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub catalog_path: PathBuf,
    pub filtered_path: PathBuf,
}

impl StoreConfig {
    /// Standard file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            catalog_path: dir.join(CATALOG_FILE),
            filtered_path: dir.join(FILTERED_FILE),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_dir(default_data_dir())
    }
}

/// Returns the default data directory: ~/.local/share/catalog_sync
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("catalog_sync")
}

/// Storefront connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    /// Search page URL without the `instock` and `page` parameters
    pub search_url: String,
    pub user_agent: String,
    /// A pagination bar advertising more pages than this aborts the pass
    pub max_pages: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Everything one run needs
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub reconcile: ReconcileConfig,
    pub store: StoreConfig,
    pub source: SourceConfig,
    /// Timezone that decides the run date
    pub timezone: Tz,
    /// Reconcile and report without writing any file
    pub dry_run: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            reconcile: ReconcileConfig::default(),
            store: StoreConfig::default(),
            source: SourceConfig::default(),
            timezone: chrono_tz::Europe::Rome,
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_policy_parses_known_names() {
        assert_eq!("sticky".parse::<StockPolicy>(), Ok(StockPolicy::Sticky));
        assert_eq!("Reset-All".parse::<StockPolicy>(), Ok(StockPolicy::ResetAll));
        assert_eq!("reset_listed".parse::<StockPolicy>(), Ok(StockPolicy::ResetListed));
        assert!("never".parse::<StockPolicy>().is_err());
    }

    #[test]
    fn stock_policy_round_trips_through_display() {
        for policy in [
            StockPolicy::ResetListed,
            StockPolicy::Sticky,
            StockPolicy::ResetAll,
        ] {
            assert_eq!(policy.to_string().parse::<StockPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn reconcile_defaults() {
        let config = ReconcileConfig::default();
        assert_eq!(config.default_kind, "game");
        assert_eq!(config.stock_policy, StockPolicy::ResetListed);
    }

    #[test]
    fn store_paths_share_directory() {
        let store = StoreConfig::in_dir("/tmp/deals");
        assert_eq!(store.catalog_path, PathBuf::from("/tmp/deals/games.json"));
        assert_eq!(
            store.filtered_path,
            PathBuf::from("/tmp/deals/games_par_or_updated.json")
        );
    }
}
