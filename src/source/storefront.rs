//! HTTP client for the storefront search pages
//!
//! Uses async reqwest; every page of a pass is fetched before anything is
//! parsed into listings.

use super::parse::{parse_last_page, parse_listings, parse_region, parse_stock_titles};
use super::ListingSource;
use crate::config::SourceConfig;
use crate::error::{Error, Result};
use crate::models::{Listing, StockListing};
use reqwest::Url;

/// Scrapes listings from the storefront's paginated search
pub struct StorefrontClient {
    client: reqwest::Client,
    user_agent: String,
    max_pages: u32,
}

impl StorefrontClient {
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: config.user_agent.clone(),
            max_pages: config.max_pages,
        }
    }

    /// Search URL for one page of a pass
    pub fn page_url(query: &str, in_stock: bool, page: u32) -> Result<Url> {
        let mut url = Url::parse(query).map_err(|e| Error::InvalidUrl(format!("{query}: {e}")))?;
        url.query_pairs_mut()
            .append_pair("instock", if in_stock { "1" } else { "0" })
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    async fn fetch_page(&self, url: Url) -> Result<String> {
        log::debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::HttpStatus(response.status()));
        }

        Ok(response.text().await?)
    }

    /// Fetch every page of a pass, bounded by page 1's pagination bar
    async fn fetch_pages(&self, query: &str, in_stock: bool) -> Result<Vec<String>> {
        let first = self.fetch_page(Self::page_url(query, in_stock, 1)?).await?;
        let last_page = parse_last_page(&first)?;
        if last_page > self.max_pages {
            return Err(Error::Html(format!(
                "pagination advertises {} pages, limit is {}",
                last_page, self.max_pages
            )));
        }

        if let Some(region) = parse_region(&first)? {
            log::debug!("Storefront region: {}", region);
        }
        log::info!(
            "Fetching {} page(s) of {} listings",
            last_page,
            if in_stock { "in-stock" } else { "priced" }
        );

        let mut pages = vec![first];
        for page in 2..=last_page {
            pages.push(self.fetch_page(Self::page_url(query, in_stock, page)?).await?);
        }

        Ok(pages)
    }
}

impl ListingSource for StorefrontClient {
    async fn price_listings(&self, query: &str) -> Result<Vec<Listing>> {
        let mut listings = Vec::new();
        for page in self.fetch_pages(query, false).await? {
            listings.extend(parse_listings(&page)?);
        }
        log::info!("Scraped {} priced listings", listings.len());
        Ok(listings)
    }

    async fn stock_listings(&self, query: &str) -> Result<Vec<StockListing>> {
        let mut titles = Vec::new();
        for page in self.fetch_pages(query, true).await? {
            titles.extend(parse_stock_titles(&page)?);
        }
        log::info!("Scraped {} in-stock titles", titles.len());
        Ok(titles)
    }
}

#[cfg(test)]
#[path = "storefront_tests.rs"]
mod tests;
