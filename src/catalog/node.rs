//! Tree representation of the FAQ catalog.
//!
//! The authoring format is a JSON object tree.  A node whose values are all
//! strings is a [`CatalogNode::Leaf`] holding one translation per language
//! code; a node whose values are all objects is a [`CatalogNode::Interior`].
//! An empty object is a section with no children yet.  Key order from the
//! document is preserved.

use indexmap::IndexMap;
use serde::Deserialize;

/// Language code (`"th"`, `"en"`, …) → translated answer.
pub type Translations = IndexMap<String, String>;

/// A single node of the catalog tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawNode")]
pub enum CatalogNode {
    Leaf(Translations),
    Interior(IndexMap<String, CatalogNode>),
}

/// Wire shape.  `Leaf` is tried first, so an object of plain strings never
/// becomes an interior node; `{}` matches it too and is reclassified below.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNode {
    Leaf(Translations),
    Interior(IndexMap<String, CatalogNode>),
}

impl From<RawNode> for CatalogNode {
    fn from(raw: RawNode) -> Self {
        match raw {
            RawNode::Leaf(translations) if translations.is_empty() => {
                CatalogNode::Interior(IndexMap::new())
            }
            RawNode::Leaf(translations) => CatalogNode::Leaf(translations),
            RawNode::Interior(children) => CatalogNode::Interior(children),
        }
    }
}

impl CatalogNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, CatalogNode::Leaf(_))
    }

    /// Translation for `code`, ignoring blank entries.
    pub fn translation(&self, code: &str) -> Option<&str> {
        match self {
            CatalogNode::Leaf(translations) => translations
                .get(code)
                .map(String::as_str)
                .filter(|text| !text.trim().is_empty()),
            CatalogNode::Interior(_) => None,
        }
    }

    /// Child named `segment`; always `None` on a leaf.
    pub fn child(&self, segment: &str) -> Option<&CatalogNode> {
        match self {
            CatalogNode::Interior(children) => children.get(segment),
            CatalogNode::Leaf(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
