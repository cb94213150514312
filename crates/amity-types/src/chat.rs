//! Message log types for a conversation.
//!
//! The log is an append-only, ordered sequence of [`LogEntry`] values. Once
//! finalized an entry never changes; the single exception is the most recent
//! bot entry while its reply stream is in flight, whose text grows
//! monotonically as fragments arrive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Who produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// What kind of entry this is.
///
/// `LevelNotice` entries are system-generated level-up announcements. They
/// are displayed like any other entry but are excluded from any history
/// handed back to the session provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Normal,
    LevelNotice,
}

/// A single entry in the conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub sender: Sender,
    pub kind: EntryKind,
    /// Grows monotonically while a bot reply streams; immutable afterward.
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl LogEntry {
    /// A user entry, created complete.
    pub fn user(text: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender: Sender::User,
            kind: EntryKind::Normal,
            text,
            created_at: Utc::now(),
        }
    }

    /// An empty bot placeholder, finalized when its reply stream ends.
    pub fn bot_pending() -> Self {
        Self {
            id: Uuid::now_v7(),
            sender: Sender::Bot,
            kind: EntryKind::Normal,
            text: String::new(),
            created_at: Utc::now(),
        }
    }

    /// A level-up notice, created complete and never streamed.
    pub fn notice(text: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender: Sender::Bot,
            kind: EntryKind::LevelNotice,
            text,
            created_at: Utc::now(),
        }
    }

    /// Whether this entry participates in provider-facing history.
    pub fn is_provider_visible(&self) -> bool {
        self.kind == EntryKind::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_roundtrip() {
        for sender in [Sender::User, Sender::Bot] {
            let s = sender.to_string();
            let parsed: Sender = s.parse().unwrap();
            assert_eq!(sender, parsed);
        }
    }

    #[test]
    fn test_user_entry_is_complete() {
        let entry = LogEntry::user("hello".to_string());
        assert_eq!(entry.sender, Sender::User);
        assert_eq!(entry.kind, EntryKind::Normal);
        assert_eq!(entry.text, "hello");
        assert!(entry.is_provider_visible());
    }

    #[test]
    fn test_bot_pending_starts_empty() {
        let entry = LogEntry::bot_pending();
        assert_eq!(entry.sender, Sender::Bot);
        assert_eq!(entry.kind, EntryKind::Normal);
        assert!(entry.text.is_empty());
    }

    #[test]
    fn test_notice_excluded_from_provider_history() {
        let entry = LogEntry::notice("level up".to_string());
        assert_eq!(entry.kind, EntryKind::LevelNotice);
        assert!(!entry.is_provider_visible());
    }

    #[test]
    fn test_log_entry_serde_roundtrip() {
        let entry = LogEntry::user("hi there".to_string());
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, entry.id);
        assert_eq!(parsed.text, "hi there");
        assert_eq!(parsed.sender, Sender::User);
    }
}
