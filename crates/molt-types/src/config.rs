//! Agent configuration types.
//!
//! `AgentConfig` represents the `config.toml` in the data directory. Every
//! field has a default, so an empty or missing file yields a working setup.
//! The Moltbook API key is deliberately absent: it comes from the
//! environment or the REPL and is never written to disk.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub social: SocialConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
}

/// Moltbook REST API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialConfig {
    #[serde(default = "default_social_base_url")]
    pub base_url: String,
    #[serde(default = "default_social_timeout")]
    pub timeout_secs: u64,
}

fn default_social_base_url() -> String {
    "https://www.moltbook.com/api/v1".to_string()
}

fn default_social_timeout() -> u64 {
    30
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            base_url: default_social_base_url(),
            timeout_secs: default_social_timeout(),
        }
    }
}

/// Chat-completion endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_chat_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Sent as `reasoning_effort`; an empty string omits the field.
    #[serde(default = "default_reasoning_effort")]
    pub reasoning_effort: String,
    #[serde(default = "default_streaming")]
    pub streaming: bool,
    #[serde(default = "default_chat_timeout")]
    pub timeout_secs: u64,
}

fn default_chat_base_url() -> String {
    "https://gen.pollinations.ai/v1".to_string()
}

fn default_model() -> String {
    "gemini".to_string()
}

fn default_temperature() -> f64 {
    0.6
}

fn default_reasoning_effort() -> String {
    "minimal".to_string()
}

fn default_streaming() -> bool {
    true
}

fn default_chat_timeout() -> u64 {
    60
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: default_chat_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            reasoning_effort: default_reasoning_effort(),
            streaming: default_streaming(),
            timeout_secs: default_chat_timeout(),
        }
    }
}

/// Autonomous browsing pass settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Posts requested from the `hot` feed.
    #[serde(default = "default_feed_limit")]
    pub feed_limit: u32,
    /// Posts considered per pass.
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    /// Delay after each considered post.
    #[serde(default = "default_pace_secs")]
    pub pace_secs: u64,
    /// Characters of post content included in the decision prompt.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
    /// Prior messages replayed into each chat request.
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

fn default_feed_limit() -> u32 {
    10
}

fn default_max_items() -> usize {
    5
}

fn default_pace_secs() -> u64 {
    2
}

fn default_preview_chars() -> usize {
    500
}

fn default_history_window() -> usize {
    10
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            feed_limit: default_feed_limit(),
            max_items: default_max_items(),
            pace_secs: default_pace_secs(),
            preview_chars: default_preview_chars(),
            history_window: default_history_window(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_config_default_values() {
        let config = AgentConfig::default();
        assert_eq!(config.social.base_url, "https://www.moltbook.com/api/v1");
        assert_eq!(config.social.timeout_secs, 30);
        assert_eq!(config.chat.model, "gemini");
        assert_eq!(config.chat.temperature, 0.6);
        assert_eq!(config.chat.reasoning_effort, "minimal");
        assert!(config.chat.streaming);
        assert_eq!(config.chat.timeout_secs, 60);
        assert_eq!(config.browse.feed_limit, 10);
        assert_eq!(config.browse.max_items, 5);
        assert_eq!(config.browse.pace_secs, 2);
        assert_eq!(config.browse.preview_chars, 500);
        assert_eq!(config.browse.history_window, 10);
    }

    #[test]
    fn test_agent_config_deserialize_empty() {
        let config: AgentConfig = toml::from_str("").unwrap();
        assert_eq!(config, AgentConfig::default());
    }

    #[test]
    fn test_agent_config_deserialize_partial() {
        let toml_str = r#"
[chat]
model = "openai"
streaming = false

[browse]
max_items = 3
"#;
        let config: AgentConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chat.model, "openai");
        assert!(!config.chat.streaming);
        assert_eq!(config.chat.temperature, 0.6);
        assert_eq!(config.browse.max_items, 3);
        assert_eq!(config.browse.feed_limit, 10);
        assert_eq!(config.social, SocialConfig::default());
    }

    #[test]
    fn test_agent_config_roundtrip() {
        let config = AgentConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AgentConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
