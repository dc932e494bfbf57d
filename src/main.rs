//! Terminal chat front-end for the university assistant bot.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (defaults on first run) plus env overrides.
//! 3. Create the [`tokio`] runtime.
//! 4. Build the [`Assistant`]: load the catalog, configure the generative model.
//! 5. Read lines from stdin until `quit` / `exit` / `bye` or EOF.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use uni_assistant_bot::{
    config::AppConfig,
    lang::Language,
    session::{ChatSession, Role},
    suggestions, Assistant,
};

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Start,
    Help,
    Topics,
    History,
    Clear,
    Quit,
    Message(&'a str),
    Empty,
}

/// Commands are matched on the trimmed line; messages keep the raw text.
fn parse_command(line: &str) -> Command<'_> {
    match line.trim().to_lowercase().as_str() {
        "" => Command::Empty,
        "/start" => Command::Start,
        "/help" => Command::Help,
        "/topics" => Command::Topics,
        "/history" => Command::History,
        "/clear" => Command::Clear,
        "quit" | "exit" | "bye" | "/quit" => Command::Quit,
        _ => Command::Message(line),
    }
}

fn welcome(bot_name: &str) -> String {
    format!(
        "👋 Welcome to {bot_name}!\n\n\
         I'm here to help you with university-related questions.\n\
         ถามอะไรเกี่ยวกับมหาวิทยาลัยก็ได้! (Ask me anything about the university!)\n\n\
         Commands:\n\
         /help    - Show what I can answer\n\
         /topics  - Suggested questions\n\
         /history - Show this conversation\n\
         /clear   - Clear the conversation\n\
         quit     - Leave"
    )
}

// ---------------------------------------------------------------------------
// Chat loop
// ---------------------------------------------------------------------------

async fn run_chat(assistant: Assistant, config: AppConfig) -> anyhow::Result<()> {
    let mut session = ChatSession::new(config.bot.history_limit);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", welcome(&config.bot.name));
    println!("\nBot: {}", assistant.greeting(Language::NonThai));

    loop {
        print!("\nYou: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Command::Empty => continue,
            Command::Quit => break,
            Command::Start => println!("\n{}", welcome(&config.bot.name)),
            Command::Help => {
                println!("\n{}", assistant.help_menu(Language::Thai));
                println!("\n{}", assistant.help_menu(Language::NonThai));
            }
            Command::Topics => {
                println!("\n{}", suggestions::render(Language::Thai));
                println!("{}", suggestions::render(Language::NonThai));
            }
            Command::History => {
                if session.is_empty() {
                    println!("\n(no messages yet)");
                }
                for turn in session.turns() {
                    println!("\n{}: {}", turn.role, turn.content);
                }
            }
            Command::Clear => {
                session.clear();
                println!("\nล้างประวัติการสนทนาแล้ว (Chat cleared)");
            }
            Command::Message(text) => {
                let answer = assistant.handle_message(text).await;
                println!("\n{}: {answer}", Role::Assistant);
                session.record_exchange(text, &answer);
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Uni Assistant Bot starting up");

    // 2. Configuration
    match AppConfig::write_defaults_if_missing() {
        Ok(true) => log::info!("Wrote default settings.toml"),
        Ok(false) => {}
        Err(e) => log::warn!("Could not write default settings: {e}"),
    }
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        let mut config = AppConfig::default();
        config.llm.apply_env_overrides();
        config
    });

    // 3. Tokio runtime
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    // 4. Assistant (catalog + generative model)
    let assistant = Assistant::from_config(&config);
    if assistant.catalog().is_empty() {
        log::warn!(
            "FAQ catalog at {} is empty; topic questions will get an apology",
            config.catalog.path.display()
        );
    }

    // 5. Chat loop
    rt.block_on(run_chat(assistant, config))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
