//! Bilingual FAQ catalog.
//!
//! This module provides:
//! * [`Catalog`] — immutable tree of localized answers, loaded once.
//! * [`CatalogNode`] — interior / leaf node of that tree.
//! * [`ResponseResolver`] — dotted-path lookup with language fallback.
//! * [`CatalogError`] / [`LookupError`] — load and lookup failures.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use uni_assistant_bot::catalog::{Catalog, ResponseResolver};
//!
//! // Never fails: a missing or broken file yields an empty catalog.
//! let catalog = Catalog::load("data/university_info.json");
//! let resolver = ResponseResolver::new(&catalog);
//!
//! println!("{}", resolver.resolve("admission.channels", true));
//! ```

pub mod loader;
pub mod node;
pub mod resolver;

use std::path::PathBuf;

use indexmap::IndexMap;
use thiserror::Error;

pub use node::{CatalogNode, Translations};
pub use resolver::{Resolution, ResponseResolver};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while reading or validating the catalog document.
///
/// [`Catalog::load`] logs these and substitutes an empty catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file not found: {0}")]
    NotFound(PathBuf),

    #[error("cannot read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Typed outcome of a failed catalog walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("path segment '{segment}' not found")]
    MissingSegment { segment: String },

    #[error("path ends at a section, not an answer")]
    NotALeaf,

    #[error("no response available in any language")]
    NoTranslation,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Read-only tree of localized FAQ answers.
///
/// Constructed once at startup and shared by reference; nothing mutates it
/// afterwards, so concurrent readers need no locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    sections: IndexMap<String, CatalogNode>,
}

impl Catalog {
    /// Catalog with no entries.  Every lookup against it fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON document.
    ///
    /// Leaves without any non-blank translation are kept; looking them up
    /// yields [`LookupError::NoTranslation`].  See [`Catalog::blank_entries`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let sections: IndexMap<String, CatalogNode> = serde_json::from_str(json)?;
        Ok(Self { sections })
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Top-level section names in document order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Walk the dot-separated `path` from the root.
    ///
    /// Returns whatever node the path ends on (leaf or interior); the walk
    /// aborts on the first segment that is not present.
    pub fn get(&self, path: &str) -> Result<&CatalogNode, LookupError> {
        let mut segments = path.split('.');

        // `split` always yields at least one item.
        let first = segments.next().unwrap_or_default();
        let mut current = self
            .sections
            .get(first)
            .ok_or_else(|| LookupError::MissingSegment {
                segment: first.to_string(),
            })?;

        for segment in segments {
            current = current
                .child(segment)
                .ok_or_else(|| LookupError::MissingSegment {
                    segment: segment.to_string(),
                })?;
        }

        Ok(current)
    }

    /// Dotted paths of leaves that have no non-blank translation.
    pub fn blank_entries(&self) -> Vec<String> {
        let mut out = Vec::new();
        for (name, node) in &self.sections {
            collect_blank(name, node, &mut out);
        }
        out
    }
}

fn collect_blank(path: &str, node: &CatalogNode, out: &mut Vec<String>) {
    match node {
        CatalogNode::Leaf(translations) => {
            if translations.values().all(|text| text.trim().is_empty()) {
                out.push(path.to_string());
            }
        }
        CatalogNode::Interior(children) => {
            for (name, child) in children {
                collect_blank(&format!("{path}.{name}"), child, out);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
