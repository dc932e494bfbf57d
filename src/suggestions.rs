//! Sample questions offered to users, grouped by category.
//!
//! These mirror the quick-question buttons of the browser chat UI.  They go
//! through the normal router like typed text, so a question filed under one
//! category can land on another topic (or on the generative model) when its
//! wording happens to contain an earlier keyword.

use crate::lang::Language;

/// A category heading and its sample questions.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionGroup {
    pub category: &'static str,
    pub questions: &'static [&'static str],
}

static THAI_SUGGESTIONS: &[SuggestionGroup] = &[
    SuggestionGroup {
        category: "การสมัครเรียน",
        questions: &[
            "ช่องทางการสมัครเรียนมีอะไรบ้าง?",
            "เทอม 1/1 และ 1/2 แตกต่างกันอย่างไร?",
            "ต้องใช้เอกสารอะไรบ้างในการสมัคร?",
        ],
    },
    SuggestionGroup {
        category: "การลงทะเบียน",
        questions: &[
            "ขั้นตอนการลงทะเบียนออนไลน์เป็นอย่างไร?",
            "ต้องเตรียมเอกสารอะไรบ้างในการรายงานตัว?",
        ],
    },
    SuggestionGroup {
        category: "หลักสูตร",
        questions: &["หลักสูตรนานาชาติมีอะไรบ้าง?"],
    },
    SuggestionGroup {
        category: "สิ่งอำนวยความสะดวก",
        questions: &[
            "มีพื้นที่ทำงานร่วมกันที่ไหนบ้าง?",
            "มีสถานที่ออกกำลังกายอะไรบ้าง?",
        ],
    },
    SuggestionGroup {
        category: "การเดินทาง",
        questions: &["เดินทางมาที่มหาวิทยาลัยได้อย่างไร?"],
    },
];

static ENGLISH_SUGGESTIONS: &[SuggestionGroup] = &[
    SuggestionGroup {
        category: "Admission",
        questions: &[
            "What are the admission channels?",
            "What are the differences between Term 1/1 and 1/2?",
            "What documents are required for admission?",
        ],
    },
    SuggestionGroup {
        category: "Registration",
        questions: &[
            "What is the online registration process?",
            "What documents do I need for reporting?",
        ],
    },
    SuggestionGroup {
        category: "Programs",
        questions: &["What international programs are available?"],
    },
    SuggestionGroup {
        category: "Facilities",
        questions: &[
            "Where are the coworking spaces?",
            "What sports facilities are available?",
        ],
    },
    SuggestionGroup {
        category: "Transportation",
        questions: &["How can I get to the university?"],
    },
];

pub fn suggestions(language: Language) -> &'static [SuggestionGroup] {
    match language {
        Language::Thai => THAI_SUGGESTIONS,
        Language::NonThai => ENGLISH_SUGGESTIONS,
    }
}

/// Render one language's suggestions as an indented text block.
pub fn render(language: Language) -> String {
    let mut out = String::new();
    for group in suggestions(language) {
        out.push_str(group.category);
        out.push('\n');
        for question in group.questions {
            out.push_str("  • ");
            out.push_str(question);
            out.push('\n');
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
