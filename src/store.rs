//! JSON persistence for the catalog and its actionable subset

use crate::config::StoreConfig;
use crate::error::Result;
use crate::models::CatalogEntry;
use std::path::{Path, PathBuf};

/// Reads and writes the two catalog files
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog_path: PathBuf,
    filtered_path: PathBuf,
}

impl CatalogStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            catalog_path: config.catalog_path.clone(),
            filtered_path: config.filtered_path.clone(),
        }
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn filtered_path(&self) -> &Path {
        &self.filtered_path
    }

    /// Load the persisted catalog, or an empty one if no file exists yet
    pub fn load(&self) -> Result<Vec<CatalogEntry>> {
        if !self.catalog_path.exists() {
            log::info!(
                "No catalog at {}, starting with an empty catalog",
                self.catalog_path.display()
            );
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.catalog_path)?;
        if content.trim().is_empty() {
            log::warn!("Catalog file {} is empty", self.catalog_path.display());
            return Ok(Vec::new());
        }

        let entries: Vec<CatalogEntry> = serde_json::from_str(&content)?;
        log::info!(
            "Loaded {} catalog entries from {}",
            entries.len(),
            self.catalog_path.display()
        );
        Ok(entries)
    }

    /// Overwrite the full catalog
    pub fn save(&self, entries: &[CatalogEntry]) -> Result<()> {
        write_json(&self.catalog_path, entries)?;
        log::info!(
            "Saved {} catalog entries to {}",
            entries.len(),
            self.catalog_path.display()
        );
        Ok(())
    }

    /// Overwrite the actionable subset
    pub fn save_filtered(&self, entries: &[CatalogEntry]) -> Result<()> {
        write_json(&self.filtered_path, entries)?;
        log::info!(
            "Saved {} par/updated entries to {}",
            entries.len(),
            self.filtered_path.display()
        );
        Ok(())
    }
}

/// Write pretty JSON next to `path`, then rename it into place
fn write_json(path: &Path, entries: &[CatalogEntry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            log::info!("Created directory: {}", parent.display());
        }
    }

    let content = serde_json::to_string_pretty(entries)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
