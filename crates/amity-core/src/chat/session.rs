//! Session manager: the single live provider session.
//!
//! Holds exactly one session handle at a time, reflecting the companion's
//! current instruction set. When the friendship level changes, a replacement
//! session is opened seeded with the carried history; the swap happens only
//! after the provider call succeeds, so from the caller's perspective it is
//! atomic. Superseded handles are abandoned, not torn down: an in-flight
//! reply they own finishes into its already-appended log entry.

use tracing::info;

use amity_types::error::{CatalogError, SessionError};
use amity_types::llm::{SessionConfig, Turn};
use amity_types::persona::{CompanionProfile, PersonaKind};

use crate::catalog;
use crate::llm::{ChatProvider, ChatSession};

/// Assemble the system instruction for a persona at a friendship level.
///
/// Substitutes the companion's name into the persona's base template,
/// appends the level's tone directive, then pins the reply language.
pub fn build_instruction(
    level: u32,
    persona: PersonaKind,
    name: &str,
    reply_language: &str,
) -> Result<String, CatalogError> {
    let persona_desc = catalog::descriptor(persona);
    let level_desc = catalog::level_descriptor(level)?;

    let base = persona_desc.base_instruction.replace("{name}", name);
    Ok(format!(
        "{base}\n\n{tone}\n\nAlways reply in {reply_language}.",
        tone = level_desc.tone_directive,
    ))
}

/// Owns the single authoritative session handle.
pub struct SessionManager<P: ChatProvider> {
    provider: P,
    reply_language: String,
    current: Box<dyn ChatSession>,
}

impl<P: ChatProvider> SessionManager<P> {
    /// Open the initial (level 1) session with no prior history.
    pub fn open(
        provider: P,
        profile: &CompanionProfile,
        reply_language: String,
    ) -> Result<Self, SessionError> {
        let instruction =
            build_instruction(1, profile.persona(), profile.name(), &reply_language)?;
        let current = provider.open_session(SessionConfig::new(instruction))?;
        info!(provider = provider.name(), "Session opened");

        Ok(Self {
            provider,
            reply_language,
            current,
        })
    }

    /// The current session handle.
    pub fn current_mut(&mut self) -> &mut dyn ChatSession {
        self.current.as_mut()
    }

    /// Replace the current session with one built for `level`, seeded with
    /// the carried turn history.
    ///
    /// On failure the previous handle stays current and the conversation
    /// continues on it.
    pub fn rebuild(
        &mut self,
        level: u32,
        profile: &CompanionProfile,
        history: Vec<Turn>,
    ) -> Result<(), SessionError> {
        let instruction =
            build_instruction(level, profile.persona(), profile.name(), &self.reply_language)?;
        let next = self
            .provider
            .open_session(SessionConfig::with_history(instruction, history))?;

        // Swap only now that the provider call has succeeded.
        self.current = next;
        info!(level, "Session rebuilt with carried history");
        Ok(())
    }

    /// The configured reply language.
    pub fn reply_language(&self) -> &str {
        &self.reply_language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::testing::ScriptedProvider;
    use amity_types::llm::{ProviderError, TurnRole};

    fn nova() -> CompanionProfile {
        CompanionProfile::new("Nova", PersonaKind::Friend).unwrap()
    }

    #[test]
    fn test_build_instruction_composition() {
        let instruction =
            build_instruction(1, PersonaKind::Friend, "Nova", "English").unwrap();
        assert!(instruction.contains("Nova"));
        assert!(!instruction.contains("{name}"));
        assert!(instruction.contains(catalog::level_descriptor(1).unwrap().tone_directive));
        assert!(instruction.ends_with("Always reply in English."));
    }

    #[test]
    fn test_build_instruction_rejects_bad_level() {
        let err = build_instruction(0, PersonaKind::Friend, "Nova", "English").unwrap_err();
        assert!(matches!(err, CatalogError::LevelOutOfRange { level: 0, .. }));
    }

    #[test]
    fn test_open_creates_level_one_session() {
        let provider = ScriptedProvider::new();
        let opened = provider.opened();
        let manager = SessionManager::open(provider, &nova(), "English".to_string()).unwrap();

        let configs = opened.lock().unwrap();
        assert_eq!(configs.len(), 1);
        assert!(configs[0].history.is_empty());
        assert!(configs[0]
            .system_instruction
            .contains(catalog::level_descriptor(1).unwrap().tone_directive));
        assert_eq!(manager.reply_language(), "English");
    }

    #[test]
    fn test_rebuild_seeds_history() {
        let provider = ScriptedProvider::new();
        let opened = provider.opened();
        let mut manager =
            SessionManager::open(provider, &nova(), "English".to_string()).unwrap();

        let history = vec![
            Turn {
                role: TurnRole::User,
                text: "hi".to_string(),
            },
            Turn {
                role: TurnRole::Model,
                text: "hello!".to_string(),
            },
        ];
        manager.rebuild(2, &nova(), history.clone()).unwrap();

        let configs = opened.lock().unwrap();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[1].history, history);
        assert!(configs[1]
            .system_instruction
            .contains(catalog::level_descriptor(2).unwrap().tone_directive));
    }

    #[test]
    fn test_rebuild_failure_keeps_previous_session() {
        let provider = ScriptedProvider::new();
        provider.fail_open_at(1);
        let opened = provider.opened();
        let mut manager =
            SessionManager::open(provider, &nova(), "English".to_string()).unwrap();

        let err = manager.rebuild(2, &nova(), Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Provider(ProviderError::Unavailable(_))
        ));
        // Only the initial session was recorded as opened.
        assert_eq!(opened.lock().unwrap().len(), 1);
        // The old handle still answers.
        let _stream = manager.current_mut().send_streaming("still there?");
    }
}
