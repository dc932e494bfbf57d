//! Keyword-based intent routing.
//!
//! [`IntentRouter`] lower-cases the message and tests keyword lists in a
//! fixed order: greeting, then help, then each topic in [`TOPIC_INTENTS`].
//! The first list with a keyword that occurs **anywhere** in the message
//! wins.  Matching is plain substring search, not word tokenisation, so
//! `"reporting"` matches `report` and `"this"` matches `hi`.  Reordering the
//! table changes which answer users get.

use crate::lang::{is_thai_text, Language};

// ---------------------------------------------------------------------------
// Intent table
// ---------------------------------------------------------------------------

/// A named topic with its trigger keywords and catalog path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    pub name: &'static str,
    /// Lower-case keywords, English and Thai mixed.
    pub keywords: &'static [&'static str],
    /// Dotted catalog path answered for this intent.
    pub path: &'static str,
}

impl Intent {
    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, self.keywords)
    }
}

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "สวัสดี"];
const HELP_KEYWORDS: &[&str] = &["help", "ช่วย", "ทำอะไรได้"];

/// Topic intents in match order.
pub static TOPIC_INTENTS: &[Intent] = &[
    Intent {
        name: "admission",
        keywords: &["admission", "สมัคร", "รับสมัคร"],
        path: "admission.channels",
    },
    Intent {
        name: "term",
        keywords: &["term", "เทอม"],
        path: "admission.terms",
    },
    Intent {
        name: "document",
        keywords: &["document", "เอกสาร"],
        path: "admission.documents",
    },
    Intent {
        name: "transport",
        keywords: &["transport", "เดินทาง"],
        path: "transportation",
    },
    Intent {
        name: "register",
        keywords: &["register", "ลงทะเบียน"],
        path: "registration.online",
    },
    Intent {
        name: "report",
        keywords: &["report", "รายงานตัว"],
        path: "registration.reporting",
    },
    Intent {
        name: "international",
        keywords: &["international", "นานาชาติ"],
        path: "international",
    },
    Intent {
        name: "coworking",
        keywords: &["coworking", "ทำงาน"],
        path: "facilities.coworking",
    },
    Intent {
        name: "sport",
        keywords: &["sport", "กีฬา"],
        path: "facilities.sports",
    },
];

// ---------------------------------------------------------------------------
// ResponseSpec
// ---------------------------------------------------------------------------

/// What the bot should answer with, as decided by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseSpec {
    /// Language-selected greeting literal.
    Greeting { want_thai: bool },
    /// Language-selected help menu literal.
    Help { want_thai: bool },
    /// Answer from the catalog at `path`.
    LocalLookup {
        intent: &'static str,
        path: &'static str,
        want_thai: bool,
    },
    /// Nothing matched; ask the generative model.
    Generative { want_thai: bool, raw_message: String },
}

impl ResponseSpec {
    pub fn want_thai(&self) -> bool {
        match self {
            ResponseSpec::Greeting { want_thai }
            | ResponseSpec::Help { want_thai }
            | ResponseSpec::LocalLookup { want_thai, .. }
            | ResponseSpec::Generative { want_thai, .. } => *want_thai,
        }
    }

    pub fn language(&self) -> Language {
        Language::from_thai_flag(self.want_thai())
    }
}

// ---------------------------------------------------------------------------
// IntentRouter
// ---------------------------------------------------------------------------

/// Maps free text to a [`ResponseSpec`] using [`TOPIC_INTENTS`].
///
/// # Example
/// ```rust
/// use uni_assistant_bot::router::{IntentRouter, ResponseSpec};
///
/// let router = IntentRouter::new();
/// assert_eq!(
///     router.route("ค่าเทอมเท่าไหร่"),
///     ResponseSpec::LocalLookup { intent: "term", path: "admission.terms", want_thai: true },
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IntentRouter {
    intents: &'static [Intent],
}

impl IntentRouter {
    pub fn new() -> Self {
        Self {
            intents: TOPIC_INTENTS,
        }
    }

    /// Topic intents in the order they are tested.
    pub fn intents(&self) -> &'static [Intent] {
        self.intents
    }

    /// Route `message`.  First match wins; see the module docs for ordering.
    pub fn route(&self, message: &str) -> ResponseSpec {
        let want_thai = is_thai_text(message);
        let lowered = message.to_lowercase();

        if contains_any(&lowered, GREETING_KEYWORDS) {
            return ResponseSpec::Greeting { want_thai };
        }
        if contains_any(&lowered, HELP_KEYWORDS) {
            return ResponseSpec::Help { want_thai };
        }

        if let Some(intent) = self.intents.iter().find(|i| i.matches(&lowered)) {
            log::debug!("Matched intent '{}' -> {}", intent.name, intent.path);
            return ResponseSpec::LocalLookup {
                intent: intent.name,
                path: intent.path,
                want_thai,
            };
        }

        ResponseSpec::Generative {
            want_thai,
            raw_message: message.to_string(),
        }
    }
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
