//! Catalog records and observed listings

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category used when the storefront does not tag a listing
pub const DEFAULT_KIND: &str = "game";

/// Date format used for `last_time_updated` (e.g. "19-10-2026")
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Outcome of the most recent reconciliation of a title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// First time the title was seen
    New,
    /// Price dropped below the historical lowest
    Updated,
    /// Price matches the historical lowest
    Par,
    /// Price above the historical lowest, or no price shown
    Unchanged,
}

impl Status {
    /// Returns the persisted label (e.g., "new", "par")
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "new",
            Status::Updated => "updated",
            Status::Par => "par",
            Status::Unchanged => "unchanged",
        }
    }

    /// True for titles currently at or below their historical lowest
    pub fn is_actionable(&self) -> bool {
        matches!(self, Status::Par | Status::Updated)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Status::New),
            "updated" => Ok(Status::Updated),
            "par" => Ok(Status::Par),
            "unchanged" => Ok(Status::Unchanged),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// One title's persisted state
///
/// Serialized as a flat record with the field names
/// `title, type, discount, price, lowest, stock, status, last_time_updated`.
/// Loading is permissive: optional values may be `null`, `""` or missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default, deserialize_with = "loose::text")]
    pub title: String,
    #[serde(rename = "type", default = "default_kind", deserialize_with = "loose::kind")]
    pub kind: String,
    #[serde(default, deserialize_with = "loose::opt_text")]
    pub discount: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_price")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "loose::opt_price")]
    pub lowest: Option<f64>,
    #[serde(default, deserialize_with = "loose::flag")]
    pub stock: bool,
    #[serde(default, deserialize_with = "loose::opt_status")]
    pub status: Option<Status>,
    #[serde(rename = "last_time_updated", default, with = "run_date")]
    pub last_updated: Option<NaiveDate>,
}

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}

impl CatalogEntry {
    /// True when the latest reconciliation put this title at its best price
    pub fn is_actionable(&self) -> bool {
        self.status.is_some_and(|s| s.is_actionable())
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}): {}",
            self.title,
            fmt_price(self.price),
            self.discount.as_deref().unwrap_or("-"),
            fmt_price(self.lowest)
        )
    }
}

/// Format an optional price for display ("9.99" or "n/a")
pub fn fmt_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{p:.2}"),
        None => "n/a".to_string(),
    }
}

/// A listing observed on a search results page, not yet reconciled
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Listing {
    pub title: String,
    /// Category tag shown on the listing (e.g. "DLC"), if any
    pub kind: Option<String>,
    pub discount: Option<String>,
    /// `None` when the listing shows no price (e.g. sold out)
    pub price: Option<f64>,
}

impl Listing {
    pub fn new(title: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            title: title.into(),
            price,
            ..Self::default()
        }
    }
}

/// A title found on the in-stock search pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockListing {
    pub title: String,
}

impl StockListing {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// `DD-MM-YYYY` (de)serialization for optional dates
mod run_date {
    use super::{loose::Loose, DATE_FORMAT};
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format(DATE_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<Loose>::deserialize(d)? {
            Some(Loose::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(Loose::Text(s)) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid date {s:?}: {e}"))),
            Some(_) => Err(D::Error::custom("expected a DD-MM-YYYY date")),
            None => Ok(None),
        }
    }
}

/// Permissive field readers for catalogs written by older versions
mod loose {
    use super::{Status, DEFAULT_KIND};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    pub(super) enum Loose {
        Bool(bool),
        Number(f64),
        Text(String),
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(opt_text(d)?.unwrap_or_default())
    }

    pub fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        match Option::<Loose>::deserialize(d)? {
            Some(Loose::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(Loose::Text(s)) => Ok(Some(s)),
            Some(Loose::Number(n)) => Ok(Some(n.to_string())),
            Some(Loose::Bool(b)) => Ok(Some(b.to_string())),
            None => Ok(None),
        }
    }

    pub fn kind<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(opt_text(d)?.unwrap_or_else(|| DEFAULT_KIND.to_string()))
    }

    pub fn opt_price<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        match Option::<Loose>::deserialize(d)? {
            Some(Loose::Number(n)) => Ok(Some(n)),
            Some(Loose::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(Loose::Text(s)) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid price {s:?}: {e}"))),
            Some(Loose::Bool(_)) => Err(D::Error::custom("expected a price")),
            None => Ok(None),
        }
    }

    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        match Option::<Loose>::deserialize(d)? {
            Some(Loose::Bool(b)) => Ok(b),
            Some(Loose::Number(n)) => Ok(n != 0.0),
            Some(Loose::Text(s)) => Ok(s == "1" || s.eq_ignore_ascii_case("true")),
            None => Ok(false),
        }
    }

    pub fn opt_status<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Status>, D::Error> {
        match opt_text(d)? {
            Some(s) => s.parse::<Status>().map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
