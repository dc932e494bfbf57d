//! Thai / non-Thai language detection.
//!
//! Classification is structural: a message is Thai when **any** character
//! falls inside the Thai Unicode block (U+0E00 – U+0E7F).  There is no
//! statistical model, so a single Thai character in an otherwise English
//! sentence flips the result.

// ---------------------------------------------------------------------------
// Unicode range
// ---------------------------------------------------------------------------

/// First codepoint of the Thai Unicode block.
const THAI_BLOCK_START: char = '\u{0E00}';

/// Last codepoint of the Thai Unicode block.
const THAI_BLOCK_END: char = '\u{0E7F}';

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Returns `true` if at least one character of `text` lies in U+0E00–U+0E7F.
///
/// Empty input returns `false`.
///
/// ```
/// use uni_assistant_bot::lang::is_thai_text;
///
/// assert!(is_thai_text("สวัสดี"));
/// assert!(is_thai_text("Hi there, สวัสดี"));
/// assert!(!is_thai_text("hello"));
/// assert!(!is_thai_text(""));
/// ```
pub fn is_thai_text(text: &str) -> bool {
    text.chars().any(is_thai_char)
}

#[inline]
fn is_thai_char(c: char) -> bool {
    (THAI_BLOCK_START..=THAI_BLOCK_END).contains(&c)
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Binary language tag derived from the user's message.
///
/// This is not a locale.  Everything that is not Thai is answered in English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Thai,
    NonThai,
}

impl Language {
    /// Classify `text` with [`is_thai_text`].
    pub fn detect(text: &str) -> Self {
        Self::from_thai_flag(is_thai_text(text))
    }

    pub fn from_thai_flag(want_thai: bool) -> Self {
        if want_thai {
            Self::Thai
        } else {
            Self::NonThai
        }
    }

    pub fn is_thai(self) -> bool {
        matches!(self, Self::Thai)
    }

    /// Catalog key for this language: `"th"` or `"en"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Thai => "th",
            Self::NonThai => "en",
        }
    }

    /// The language tried when this one has no translation.
    pub fn other(self) -> Self {
        match self {
            Self::Thai => Self::NonThai,
            Self::NonThai => Self::Thai,
        }
    }

    /// English name used in generative-model instructions.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Thai => "Thai",
            Self::NonThai => "English",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
