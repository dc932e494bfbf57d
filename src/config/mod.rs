//! Configuration module for the university assistant bot.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the bot, the
//! FAQ catalog and the generative fallback, `AppPaths` for the platform
//! config directory, and TOML persistence via `AppConfig::load` /
//! `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, BotConfig, CatalogConfig, LlmConfig, LlmProvider, API_KEY_ENV_VARS};
