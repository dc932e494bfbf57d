//! Dotted-path lookup with language and availability fallback.
//!
//! Resolution order for `resolve(path, want_thai)`:
//!
//! | # | Situation                                   | Result                         |
//! |---|---------------------------------------------|--------------------------------|
//! | 1 | Leaf has the requested language             | translation, verbatim          |
//! | 2 | Leaf only has the other language            | marker + other translation     |
//! | 3 | Path missing, ends on a section, or no text | apology in requested language  |
//!
//! Cases 2 and 3 are logged with the path and requested language because the
//! caller cannot tell them apart from a normal answer.

use crate::catalog::{Catalog, LookupError};
use crate::lang::Language;
use crate::messages;

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Typed outcome of a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Answer in the requested language.
    Exact(&'a str),
    /// Answer only available in `served`.
    CrossLanguage { text: &'a str, served: Language },
    /// No answer at all.
    Unavailable(LookupError),
}

impl Resolution<'_> {
    /// Render for a user who wrote in `requested`.  Never empty.
    pub fn render(&self, requested: Language) -> String {
        match self {
            Resolution::Exact(text) => (*text).to_string(),
            Resolution::CrossLanguage { text, served } => {
                format!("{}{}", messages::fallback_marker(*served), text)
            }
            Resolution::Unavailable(_) => messages::not_available(requested).to_string(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        !matches!(self, Resolution::Exact(_))
    }
}

// ---------------------------------------------------------------------------
// ResponseResolver
// ---------------------------------------------------------------------------

/// Resolves dotted catalog paths into localized strings.
///
/// Borrows the catalog; holds no state of its own, so repeated calls with
/// the same arguments return the same string.
#[derive(Debug, Clone, Copy)]
pub struct ResponseResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> ResponseResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Look up `path` for `language` without rendering or logging.
    pub fn lookup(&self, path: &str, language: Language) -> Resolution<'a> {
        let node = match self.catalog.get(path) {
            Ok(node) => node,
            Err(e) => return Resolution::Unavailable(e),
        };
        if !node.is_leaf() {
            return Resolution::Unavailable(LookupError::NotALeaf);
        }

        if let Some(text) = node.translation(language.code()) {
            return Resolution::Exact(text);
        }

        let other = language.other();
        match node.translation(other.code()) {
            Some(text) => Resolution::CrossLanguage {
                text,
                served: other,
            },
            None => Resolution::Unavailable(LookupError::NoTranslation),
        }
    }

    /// Resolve `path` to a user-facing string.  Never fails and never
    /// returns an empty string.
    pub fn resolve(&self, path: &str, want_thai: bool) -> String {
        let language = Language::from_thai_flag(want_thai);
        let resolution = self.lookup(path, language);

        match &resolution {
            Resolution::Exact(_) => {}
            Resolution::CrossLanguage { served, .. } => log::warn!(
                "{} response not found for {path}, falling back to {}",
                language.display_name(),
                served.display_name()
            ),
            Resolution::Unavailable(e) => log::error!(
                "No response for {path} (requested '{}'): {e}",
                language.code()
            ),
        }

        resolution.render(language)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
