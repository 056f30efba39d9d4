use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_API_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Startup fails if no API key can be found.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub anthropic_model: String,
    pub anthropic_api_url: String,
    pub max_tokens: u32,
    pub model_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: resolve_api_key()?,
            anthropic_model: optional_env("ANTHROPIC_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            anthropic_api_url: optional_env("ANTHROPIC_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            max_tokens: parse_env("MODEL_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            model_timeout_secs: parse_env("MODEL_TIMEOUT_SECS", 120)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Key precedence: process env (which includes anything `.env` set), then a
/// mounted secret file named by `ANTHROPIC_API_KEY_FILE`.
fn resolve_api_key() -> Result<String> {
    if let Some(key) = optional_env("ANTHROPIC_API_KEY") {
        return Ok(key);
    }

    let path = optional_env("ANTHROPIC_API_KEY_FILE").context(
        "Required environment variable 'ANTHROPIC_API_KEY' is not set \
         (and no ANTHROPIC_API_KEY_FILE was given)",
    )?;
    let key = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read API key file '{path}'"))?;
    non_blank(key).with_context(|| format!("API key file '{path}' is empty"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
