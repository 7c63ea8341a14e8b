//! Field extraction from storefront search pages

use crate::error::{Error, Result};
use crate::models::{Listing, StockListing};
use scraper::{ElementRef, Html, Selector};

/// CSS selectors for the search results markup
struct Selectors {
    item: Selector,
    title: Selector,
    kind: Selector,
    discount: Selector,
    price: Selector,
    page: Selector,
    region: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            item: selector("div.item.force-badge")?,
            title: selector("span.title")?,
            kind: selector("span.dlc")?,
            discount: selector("div.discount")?,
            price: selector("div.price")?,
            page: selector("ul.pagination li")?,
            region: selector("span.localisation")?,
        })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Html(format!("bad selector '{css}': {e:?}")))
}

/// Trimmed text of the first match of `sel` under `el`, if non-empty
fn child_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    el.select(sel).next().and_then(|child| {
        let text = child.text().collect::<String>().trim().to_string();
        (!text.is_empty()).then_some(text)
    })
}

/// Parse a displayed price such as "12.99€", "12,99 €" or "1.234,56 €"
///
/// Keeps digits and separators. When both `.` and `,` appear, the last one
/// is the decimal separator. A single kind of separator is decimal when it
/// appears once and a thousands separator otherwise. Returns `None` when
/// nothing numeric is left.
pub fn parse_price(text: &str) -> Option<f64> {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    let decimal = match (kept.rfind('.'), kept.rfind(',')) {
        (Some(dot), Some(comma)) => Some(if dot > comma { '.' } else { ',' }),
        (Some(_), None) if kept.matches('.').count() == 1 => Some('.'),
        (None, Some(_)) if kept.matches(',').count() == 1 => Some(','),
        _ => None,
    };

    let normalized: String = kept
        .chars()
        .filter_map(|c| match c {
            '.' | ',' if Some(c) == decimal => Some('.'),
            '.' | ',' => None,
            digit => Some(digit),
        })
        .collect();

    normalized.parse::<f64>().ok()
}

/// Extract every listing from a price-pass page
pub fn parse_listings(html: &str) -> Result<Vec<Listing>> {
    let sel = Selectors::new()?;
    let document = Html::parse_document(html);

    let listings = document
        .select(&sel.item)
        .map(|item| Listing {
            title: child_text(item, &sel.title).unwrap_or_default(),
            kind: child_text(item, &sel.kind),
            discount: child_text(item, &sel.discount),
            price: child_text(item, &sel.price).and_then(|p| parse_price(&p)),
        })
        .collect();

    Ok(listings)
}

/// Extract the titles from a stock-pass page
pub fn parse_stock_titles(html: &str) -> Result<Vec<StockListing>> {
    let sel = Selectors::new()?;
    let document = Html::parse_document(html);

    let titles = document
        .select(&sel.item)
        .filter_map(|item| child_text(item, &sel.title))
        .map(StockListing::new)
        .collect();

    Ok(titles)
}

/// Last page number advertised by the pagination bar (1 if there is none)
pub fn parse_last_page(html: &str) -> Result<u32> {
    let sel = Selectors::new()?;
    let document = Html::parse_document(html);

    let last = document
        .select(&sel.page)
        .filter_map(|li| li.text().collect::<String>().trim().parse::<u32>().ok())
        .max()
        .unwrap_or(1);

    Ok(last.max(1))
}

/// Region label the storefront served the page for (e.g. "Italia")
pub fn parse_region(html: &str) -> Result<Option<String>> {
    let sel = Selectors::new()?;
    let document = Html::parse_document(html);
    Ok(document
        .select(&sel.region)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty()))
}

#[cfg(test)]
pub(crate) use tests::{item, search_page};

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
