//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across tasks.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

/// Environment variables checked (in order) for the generative-model API key.
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "LLM_API_KEY"];

// ---------------------------------------------------------------------------
// LlmProvider
// ---------------------------------------------------------------------------

/// Selects which backend answers open-ended questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LlmProvider {
    /// Google Gemini `generateContent` REST API.  Requires an API key.
    Gemini,
    /// Any OpenAI-compatible `/v1/chat/completions` endpoint.
    OpenAiCompatible,
    /// Ollama running locally (OpenAI mode), no authentication.
    Ollama,
    /// Generative answers disabled; unmatched questions get an apology.
    Disabled,
}

impl Default for LlmProvider {
    fn default() -> Self {
        Self::Gemini
    }
}

impl LlmProvider {
    /// Endpoint used when `llm.base_url` is not set.
    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::Gemini => "https://generativelanguage.googleapis.com",
            Self::OpenAiCompatible => "https://api.openai.com",
            Self::Ollama => "http://localhost:11434",
            Self::Disabled => "",
        }
    }
}

// ---------------------------------------------------------------------------
// LlmConfig
// ---------------------------------------------------------------------------

/// Settings for the generative fallback used when no topic matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Whether generative answers are used at all.
    pub enabled: bool,
    /// Which backend to use.
    pub provider: LlmProvider,
    /// Base URL of the API endpoint; `None` uses
    /// [`LlmProvider::default_base_url`].
    pub base_url: Option<String>,
    /// API key; `None` for local providers.
    pub api_key: Option<String>,
    /// Model identifier sent to the API.
    pub model: String,
    /// Sampling temperature (0.0 – 1.0).
    pub temperature: f32,
    /// Upper bound on generated tokens per answer.
    pub max_tokens: u32,
    /// Maximum seconds to wait for a response before giving up.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: LlmProvider::default(),
            base_url: None,
            api_key: None,
            model: "gemini-pro".into(),
            temperature: 0.3,
            max_tokens: 500,
            timeout_secs: 15,
        }
    }
}

impl LlmConfig {
    /// `true` when a generator can be built from these settings.
    ///
    /// Gemini needs a non-empty API key; local and OpenAI-compatible
    /// endpoints may run without one.
    pub fn is_usable(&self) -> bool {
        if !self.enabled || self.provider == LlmProvider::Disabled {
            return false;
        }
        match self.provider {
            LlmProvider::Gemini => self.api_key.as_deref().is_some_and(|k| !k.is_empty()),
            _ => true,
        }
    }

    /// Configured base URL, or the provider's default when unset or blank.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.provider.default_base_url())
    }

    /// Replace `api_key` with the first non-empty variable in
    /// [`API_KEY_ENV_VARS`], if any.
    pub fn apply_env_overrides(&mut self) {
        self.apply_key_lookup(|name| std::env::var(name).ok());
    }

    fn apply_key_lookup(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = API_KEY_ENV_VARS
            .iter()
            .filter_map(|&name| lookup(name))
            .find(|value| !value.trim().is_empty())
        {
            self.api_key = Some(key.trim().to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// BotConfig
// ---------------------------------------------------------------------------

/// Identity and front-end settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Name used in the welcome text and model instructions.
    pub name: String,
    /// Number of chat turns the terminal session keeps.
    pub history_limit: usize,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "Uni Assistant Bot".into(),
            history_limit: 20,
        }
    }
}

// ---------------------------------------------------------------------------
// CatalogConfig
// ---------------------------------------------------------------------------

/// Location of the FAQ document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the JSON catalog; relative paths resolve against the
    /// working directory.
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/university_info.json"),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bot: BotConfig,
    pub catalog: CatalogConfig,
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`,
    /// then apply environment overrides.
    ///
    /// Returns defaults when the file does not exist yet.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&AppPaths::new().settings_file)?;
        config.llm.apply_env_overrides();
        Ok(config)
    }

    /// Load from an explicit path without environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Write a default `settings.toml` on first run so users have a file to
    /// edit.  Returns `true` when a file was created.
    pub fn write_defaults_if_missing() -> Result<bool> {
        Self::write_defaults_if_missing_at(&AppPaths::new().settings_file)
    }

    /// Like [`AppConfig::write_defaults_if_missing`] for an explicit path.
    pub fn write_defaults_if_missing_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.bot.name, "Uni Assistant Bot");
        assert_eq!(cfg.bot.history_limit, 20);
        assert_eq!(cfg.catalog.path, PathBuf::from("data/university_info.json"));
        assert_eq!(cfg.llm.provider, LlmProvider::Gemini);
        assert_eq!(cfg.llm.model, "gemini-pro");
        assert_eq!(cfg.llm.max_tokens, 500);
        assert_eq!(cfg.llm.timeout_secs, 15);
        assert!(cfg.llm.api_key.is_none());
    }

    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config.bot.name, AppConfig::default().bot.name);
    }

    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.toml");

        let mut cfg = AppConfig::default();
        cfg.bot.name = "KMUTT Helper".into();
        cfg.catalog.path = PathBuf::from("/srv/faq.json");
        cfg.llm.provider = LlmProvider::Ollama;
        cfg.llm.base_url = Some("http://127.0.0.1:8080".into());
        cfg.llm.api_key = Some("sk-test".into());
        cfg.llm.model = "qwen2.5:3b".into();

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.bot.name, "KMUTT Helper");
        assert_eq!(loaded.catalog.path, PathBuf::from("/srv/faq.json"));
        assert_eq!(loaded.llm.provider, LlmProvider::Ollama);
        assert_eq!(loaded.llm.base_url(), "http://127.0.0.1:8080");
        assert_eq!(loaded.llm.api_key, Some("sk-test".into()));
        assert_eq!(loaded.llm.model, "qwen2.5:3b");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[llm]\nmodel = \"gemini-1.5-flash\"\n").unwrap();

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(loaded.llm.model, "gemini-1.5-flash");
        assert_eq!(loaded.llm.max_tokens, 500);
        assert_eq!(loaded.bot.name, "Uni Assistant Bot");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[llm\nmodel = ").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn first_run_writes_defaults_once() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("uni-assistant-bot").join("settings.toml");

        assert!(AppConfig::write_defaults_if_missing_at(&path).expect("write"));
        let written = AppConfig::load_from(&path).expect("load");
        assert_eq!(written.bot.name, "Uni Assistant Bot");

        std::fs::write(&path, "[bot]\nname = \"Edited\"\n").unwrap();
        assert!(!AppConfig::write_defaults_if_missing_at(&path).expect("second call"));
        assert_eq!(AppConfig::load_from(&path).expect("load").bot.name, "Edited");
    }

    #[test]
    fn base_url_defaults_per_provider() {
        let mut llm = LlmConfig::default();
        assert_eq!(llm.base_url(), "https://generativelanguage.googleapis.com");
        llm.provider = LlmProvider::Ollama;
        assert_eq!(llm.base_url(), "http://localhost:11434");
        llm.provider = LlmProvider::OpenAiCompatible;
        assert_eq!(llm.base_url(), "https://api.openai.com");
        llm.base_url = Some("  ".into());
        assert_eq!(llm.base_url(), "https://api.openai.com");
        llm.base_url = Some("http://gpu-box:8000".into());
        assert_eq!(llm.base_url(), "http://gpu-box:8000");
    }

    #[test]
    fn ollama_from_file_without_base_url_targets_localhost() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[llm]\nprovider = \"Ollama\"\nmodel = \"qwen2.5:3b\"\n").unwrap();

        let loaded = AppConfig::load_from(&path).expect("load");
        assert!(loaded.llm.is_usable());
        assert_eq!(loaded.llm.base_url(), "http://localhost:11434");
    }

    #[test]
    fn gemini_requires_api_key() {
        let mut llm = LlmConfig::default();
        assert!(!llm.is_usable());
        llm.api_key = Some(String::new());
        assert!(!llm.is_usable());
        llm.api_key = Some("key".into());
        assert!(llm.is_usable());
    }

    #[test]
    fn local_provider_needs_no_key() {
        let llm = LlmConfig {
            provider: LlmProvider::Ollama,
            ..LlmConfig::default()
        };
        assert!(llm.is_usable());
    }

    #[test]
    fn disabled_is_never_usable() {
        let mut llm = LlmConfig {
            api_key: Some("key".into()),
            ..LlmConfig::default()
        };
        llm.enabled = false;
        assert!(!llm.is_usable());
        llm.enabled = true;
        llm.provider = LlmProvider::Disabled;
        assert!(!llm.is_usable());
    }

    #[test]
    fn env_key_overrides_file_key() {
        let mut llm = LlmConfig {
            api_key: Some("from-file".into()),
            ..LlmConfig::default()
        };
        llm.apply_key_lookup(|name| match name {
            "GEMINI_API_KEY" => Some("  ".into()),
            "LLM_API_KEY" => Some("from-env".into()),
            _ => None,
        });
        assert_eq!(llm.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn absent_env_keeps_file_key() {
        let mut llm = LlmConfig {
            api_key: Some("from-file".into()),
            ..LlmConfig::default()
        };
        llm.apply_key_lookup(|_| None);
        assert_eq!(llm.api_key.as_deref(), Some("from-file"));
    }
}
