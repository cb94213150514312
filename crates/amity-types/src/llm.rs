//! Provider-facing types for Amity.
//!
//! These types model the data shapes handed to the language-model session
//! provider: conversation turns, session configuration, and the provider
//! error taxonomy.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Role of a turn in provider-facing history.
///
/// Follows the Gemini wire convention: the agent's side is "model".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Model => write!(f, "model"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(TurnRole::User),
            "model" => Ok(TurnRole::Model),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// A single prior turn handed to the provider as seed history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

/// Configuration for opening a provider session.
///
/// A session is bound to one instruction set and an optional seed history;
/// changing either means opening a replacement session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub system_instruction: String,
    #[serde(default)]
    pub history: Vec<Turn>,
}

impl SessionConfig {
    /// A session config with no prior history.
    pub fn new(system_instruction: String) -> Self {
        Self {
            system_instruction,
            history: Vec::new(),
        }
    }

    /// A session config seeded with prior turns.
    pub fn with_history(system_instruction: String, history: Vec<Turn>) -> Self {
        Self {
            system_instruction,
            history,
        }
    }
}

/// Errors from provider operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider client could not initialize (e.g., missing credential).
    /// Terminal for the conversation feature; surfaced to setup, not retried.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    /// A reply stream failed mid-flight. Recoverable per exchange.
    #[error("stream error: {0}")]
    Stream(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_role_roundtrip() {
        for role in [TurnRole::User, TurnRole::Model] {
            let s = role.to_string();
            let parsed: TurnRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_turn_role_serde() {
        let role = TurnRole::Model;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"model\"");
        let parsed: TurnRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TurnRole::Model);
    }

    #[test]
    fn test_session_config_defaults_to_empty_history() {
        let config = SessionConfig::new("be kind".to_string());
        assert!(config.history.is_empty());

        let json = r#"{"system_instruction":"be kind"}"#;
        let parsed: SessionConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.history.is_empty());
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Unavailable("no API key".to_string());
        assert_eq!(err.to_string(), "provider unavailable: no API key");

        let err = ProviderError::Stream("connection reset".to_string());
        assert!(err.to_string().contains("connection reset"));
    }
}
