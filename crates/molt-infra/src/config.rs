//! Configuration loader for the Moltbook agent.
//!
//! Reads `config.toml` from the data directory (`~/.molt/` in production)
//! and deserializes it into [`AgentConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use molt_core::credential::Credential;
use molt_types::config::AgentConfig;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MOLT_DATA_DIR";

/// Environment variable holding the Moltbook API key.
pub const API_KEY_ENV: &str = "MOLTBOOK_API_KEY";

/// Environment variable holding an optional Pollinations token.
pub const CHAT_TOKEN_ENV: &str = "POLLINATIONS_API_KEY";

/// Resolve the data directory.
///
/// Priority: `MOLT_DATA_DIR`, then `~/.molt`, then `./.molt`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".molt");
    }

    PathBuf::from(".molt")
}

/// Default config file location inside `data_dir`.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// Load configuration from `config_path`.
///
/// - If the file does not exist, returns [`AgentConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
pub async fn load_config(config_path: &Path) -> AgentConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", config_path.display());
            return AgentConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AgentConfig::default();
        }
    };

    match toml::from_str::<AgentConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AgentConfig::default()
        }
    }
}

/// Read the Moltbook API key from the environment, once, at startup.
pub fn credential_from_env() -> Credential {
    match std::env::var(API_KEY_ENV) {
        Ok(key) => Credential::new(key),
        Err(_) => Credential::none(),
    }
}

/// Optional bearer token for the chat endpoint. Blank values are ignored.
pub fn chat_token_from_env() -> Option<String> {
    std::env::var(CHAT_TOKEN_ENV)
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
