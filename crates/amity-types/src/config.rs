//! Global configuration types for Amity.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! provider model, the pinned reply language, and HTTP timeouts.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Amity client.
///
/// Loaded from `~/.amity/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Provider model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Language the companion always replies in. Fixed by configuration,
    /// not user-selectable at runtime.
    #[serde(default = "default_reply_language")]
    pub reply_language: String,

    /// Upper bound on a single provider request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_reply_language() -> String {
    "English".to_string()
}

fn default_request_timeout_secs() -> u64 {
    300
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            reply_language: default_reply_language(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.reply_language, "English");
        assert_eq!(config.request_timeout_secs, 300);
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.reply_language, "English");
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
model = "gemini-2.5-pro"
reply_language = "Japanese"
request_timeout_secs = 120
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.reply_language, "Japanese");
        assert_eq!(config.request_timeout_secs, 120);
    }

    #[test]
    fn test_global_config_serde_roundtrip() {
        let config = GlobalConfig {
            model: "gemini-2.0-flash-lite".to_string(),
            reply_language: "Spanish".to_string(),
            request_timeout_secs: 60,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GlobalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model, "gemini-2.0-flash-lite");
        assert_eq!(parsed.reply_language, "Spanish");
        assert_eq!(parsed.request_timeout_secs, 60);
    }
}
