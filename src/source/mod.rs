//! Listing sources: where observed prices come from

mod parse;
mod storefront;

pub use parse::{parse_last_page, parse_listings, parse_price, parse_region, parse_stock_titles};
pub use storefront::StorefrontClient;

use crate::error::Result;
use crate::models::{Listing, StockListing};

/// Produces the observed listings for one search query
///
/// Implementations return the flattened concatenation of every result
/// page, or an error if any page could not be read. A partial result is
/// never returned.
#[allow(async_fn_in_trait)]
pub trait ListingSource {
    /// All listings of the price pass, priced or not
    async fn price_listings(&self, query: &str) -> Result<Vec<Listing>>;

    /// Titles currently purchasable
    async fn stock_listings(&self, query: &str) -> Result<Vec<StockListing>>;
}
