//! Fixed user-facing strings, one per language.
//!
//! Every degraded path in the bot ends in one of these literals, so the user
//! always receives a readable sentence in their own language.

use crate::lang::Language;

// ---------------------------------------------------------------------------
// Greeting / help
// ---------------------------------------------------------------------------

const GREETING_TH: &str = "สวัสดีค่ะ มีอะไรให้ช่วยไหมคะ?";
const GREETING_EN: &str = "Hello! How can I help you today?";

const HELP_TH: &str = "\
ฉันสามารถช่วยคุณเกี่ยวกับ:
1. ข้อมูลการรับสมัคร
2. ความแตกต่างระหว่างเทอม
3. เอกสารที่จำเป็น
4. การเดินทาง
5. การลงทะเบียนออนไลน์
6. การรายงานตัว
7. โปรแกรมนานาชาติ
8. พื้นที่ทำงานร่วมกัน
9. สิ่งอำนวยความสะดวกด้านกีฬา

คุณสามารถถามคำถามได้เลยค่ะ";

const HELP_EN: &str = "\
I can help you with:
1. Admission information
2. Term differences
3. Required documents
4. Transportation
5. Online registration
6. Document reporting
7. International programs
8. Coworking spaces
9. Sports facilities

Feel free to ask any questions!";

// ---------------------------------------------------------------------------
// Degradation literals
// ---------------------------------------------------------------------------

const NOT_AVAILABLE_TH: &str =
    "ขออภัย ไม่พบข้อมูลที่ต้องการในขณะนี้ กรุณาลองใหม่อีกครั้งในภายหลัง";
const NOT_AVAILABLE_EN: &str =
    "Sorry, the requested information is not available at the moment. Please try again later.";

const GENERATOR_OFFLINE_TH: &str = "ขออภัยค่ะ ไม่สามารถเชื่อมต่อกับระบบได้ในขณะนี้";
const GENERATOR_OFFLINE_EN: &str = "Sorry, I cannot connect to the system at the moment.";

const GENERATOR_FAILED_TH: &str = "ขออภัยค่ะ ไม่สามารถประมวลผลคำถามได้";
const GENERATOR_FAILED_EN: &str = "Sorry, I cannot process your question at the moment.";

/// Prefix added when an answer only exists in English.
pub const ENGLISH_ONLY_MARKER: &str = "(English response only) ";
/// Prefix added when an answer only exists in Thai.
pub const THAI_ONLY_MARKER: &str = "(Thai response only) ";

// ---------------------------------------------------------------------------
// Selectors
// ---------------------------------------------------------------------------

pub fn greeting(language: Language) -> &'static str {
    pick(language, GREETING_TH, GREETING_EN)
}

/// Itemised list of the supported topics.
pub fn help_menu(language: Language) -> &'static str {
    pick(language, HELP_TH, HELP_EN)
}

/// Apology used when the catalog has no answer for a path.
pub fn not_available(language: Language) -> &'static str {
    pick(language, NOT_AVAILABLE_TH, NOT_AVAILABLE_EN)
}

/// Apology used when no generative model is configured.
pub fn generator_offline(language: Language) -> &'static str {
    pick(language, GENERATOR_OFFLINE_TH, GENERATOR_OFFLINE_EN)
}

/// Apology used when the generative model call fails.
pub fn generator_failed(language: Language) -> &'static str {
    pick(language, GENERATOR_FAILED_TH, GENERATOR_FAILED_EN)
}

/// Marker announcing that the answer is in `served` rather than the
/// language the user wrote in.
pub fn fallback_marker(served: Language) -> &'static str {
    pick(served, THAI_ONLY_MARKER, ENGLISH_ONLY_MARKER)
}

fn pick(language: Language, th: &'static str, en: &'static str) -> &'static str {
    match language {
        Language::Thai => th,
        Language::NonThai => en,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::is_thai_text;

    #[test]
    fn thai_literals_are_thai() {
        for text in [
            greeting(Language::Thai),
            help_menu(Language::Thai),
            not_available(Language::Thai),
            generator_offline(Language::Thai),
            generator_failed(Language::Thai),
        ] {
            assert!(is_thai_text(text), "not Thai: {text}");
        }
    }

    #[test]
    fn english_literals_have_no_thai() {
        for text in [
            greeting(Language::NonThai),
            help_menu(Language::NonThai),
            not_available(Language::NonThai),
            generator_offline(Language::NonThai),
            generator_failed(Language::NonThai),
        ] {
            assert!(!is_thai_text(text), "unexpected Thai: {text}");
        }
    }

    #[test]
    fn help_menu_lists_nine_topics() {
        for lang in [Language::Thai, Language::NonThai] {
            let menu = help_menu(lang);
            assert!(menu.contains("1. "));
            assert!(menu.contains("9. "));
            assert!(!menu.contains("10. "));
        }
    }

    #[test]
    fn catalog_and_generator_apologies_differ() {
        for lang in [Language::Thai, Language::NonThai] {
            assert_ne!(not_available(lang), generator_failed(lang));
            assert_ne!(not_available(lang), generator_offline(lang));
        }
    }

    #[test]
    fn marker_names_served_language() {
        assert_eq!(fallback_marker(Language::NonThai), "(English response only) ");
        assert_eq!(fallback_marker(Language::Thai), "(Thai response only) ");
    }
}
