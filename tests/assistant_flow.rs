//! End-to-end: detect → route → resolve / generate through the public API.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use uni_assistant_bot::catalog::{Catalog, ResponseResolver};
use uni_assistant_bot::llm::{GenerativeResponder, LlmError, PromptBuilder, TextGenerator};
use uni_assistant_bot::router::TOPIC_INTENTS;
use uni_assistant_bot::Assistant;

const NOT_AVAILABLE_EN: &str =
    "Sorry, the requested information is not available at the moment. Please try again later.";
const NOT_AVAILABLE_TH: &str =
    "ขออภัย ไม่พบข้อมูลที่ต้องการในขณะนี้ กรุณาลองใหม่อีกครั้งในภายหลัง";

/// Echoes the user text and counts calls.
struct EchoGenerator {
    calls: AtomicUsize,
}

#[async_trait]
impl TextGenerator for EchoGenerator {
    async fn generate(&self, _system: &str, user: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("generated: {user}"))
    }
}

struct DownGenerator;

#[async_trait]
impl TextGenerator for DownGenerator {
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
        Err(LlmError::Request("connection refused".into()))
    }
}

fn shipped_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/university_info.json");
    Catalog::try_load(path).expect("shipped catalog must be valid")
}

fn assistant(catalog: Catalog, generator: Arc<dyn TextGenerator>) -> Assistant {
    Assistant::new(
        catalog,
        GenerativeResponder::new(Some(generator), PromptBuilder::new("Uni Assistant Bot")),
    )
}

#[test]
fn shipped_catalog_answers_every_topic_in_both_languages() {
    let catalog = shipped_catalog();
    let resolver = ResponseResolver::new(&catalog);
    for intent in TOPIC_INTENTS {
        for want_thai in [true, false] {
            let answer = resolver.resolve(intent.path, want_thai);
            assert_ne!(answer, NOT_AVAILABLE_EN, "{}", intent.path);
            assert_ne!(answer, NOT_AVAILABLE_TH, "{}", intent.path);
            assert!(!answer.starts_with('('), "fallback for {}", intent.path);
        }
    }
}

#[tokio::test]
async fn topic_questions_never_reach_the_model() {
    let echo = Arc::new(EchoGenerator {
        calls: AtomicUsize::new(0),
    });
    let shared: Arc<dyn TextGenerator> = echo.clone();
    let a = assistant(shipped_catalog(), shared);

    let th = a.handle_message("รถไฟฟ้าไปมหาวิทยาลัย เดินทางยังไง").await;
    assert!(th.starts_with("การเดินทางมามหาวิทยาลัย"));

    let en = a.handle_message("Sport facilities?").await;
    assert!(en.starts_with("Sports facilities:"));

    assert_eq!(echo.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unmatched_question_goes_to_model() {
    let echo = Arc::new(EchoGenerator {
        calls: AtomicUsize::new(0),
    });
    let shared: Arc<dyn TextGenerator> = echo.clone();
    let a = assistant(shipped_catalog(), shared);

    assert_eq!(
        a.handle_message("Where is the library?").await,
        "generated: Where is the library?"
    );
    assert_eq!(echo.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn model_failure_apologises_in_users_language() {
    let a = assistant(shipped_catalog(), Arc::new(DownGenerator));
    assert_eq!(
        a.handle_message("ห้องสมุดอยู่ที่ไหน").await,
        "ขออภัยค่ะ ไม่สามารถประมวลผลคำถามได้"
    );
    assert_eq!(
        a.handle_message("Where is the library?").await,
        "Sorry, I cannot process your question at the moment."
    );
}

#[tokio::test]
async fn english_only_answer_is_marked_for_thai_user() {
    let catalog = Catalog::from_json_str(
        r#"{"admission": {"channels": {"en": "Apply online."}}}"#,
    )
    .unwrap();
    let a = assistant(catalog, Arc::new(DownGenerator));
    assert_eq!(
        a.handle_message("สมัครเรียนยังไง").await,
        "(English response only) Apply online."
    );
}

#[tokio::test]
async fn broken_catalog_degrades_every_topic_to_apology() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("university_info.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let catalog = Catalog::load(&path);
    assert!(catalog.is_empty());

    let a = assistant(catalog, Arc::new(DownGenerator));
    assert_eq!(a.handle_message("admission").await, NOT_AVAILABLE_EN);
    assert_eq!(a.handle_message("เทอม").await, NOT_AVAILABLE_TH);
    // Greeting and help do not depend on the catalog.
    assert_eq!(
        a.handle_message("hello").await,
        "Hello! How can I help you today?"
    );
}

#[tokio::test]
async fn help_wins_over_document_and_report() {
    let a = assistant(shipped_catalog(), Arc::new(DownGenerator));
    let answer = a.handle_message("I need help reporting my documents").await;
    assert!(answer.starts_with("I can help you with:"));
}

#[tokio::test]
async fn repeated_questions_get_identical_answers() {
    let a = assistant(shipped_catalog(), Arc::new(DownGenerator));
    for q in ["term dates", "ลงทะเบียน", "missing topic xyz"] {
        assert_eq!(a.handle_message(q).await, a.handle_message(q).await);
    }
}
