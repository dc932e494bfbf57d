//! Loading the catalog document from disk.
//!
//! A broken data file must not take the bot down: [`Catalog::load`] logs any
//! failure and returns an empty catalog, after which every lookup degrades
//! to the "not available" apology.

use std::path::Path;

use super::{Catalog, CatalogError};

impl Catalog {
    /// Load from `path`, substituting an empty catalog on any failure.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded FAQ catalog from {} ({} sections)",
                    path.display(),
                    catalog.sections().count()
                );
                for entry in catalog.blank_entries() {
                    log::warn!("FAQ entry '{entry}' has no text in any language");
                }
                catalog
            }
            Err(e) => {
                log::error!("Failed to load FAQ catalog from {}: {e}", path.display());
                Self::empty()
            }
        }
    }

    /// Load from `path`, surfacing the failure.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
