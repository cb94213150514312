//! Personality descriptors.

use amity_types::error::CatalogError;
use amity_types::persona::PersonaKind;

/// Static description of one companion personality.
///
/// `base_instruction` contains a `{name}` placeholder substituted with the
/// companion's display name when the system instruction is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaDescriptor {
    pub display_name: &'static str,
    pub short_description: &'static str,
    pub base_instruction: &'static str,
}

const STUDY_BUDDY: PersonaDescriptor = PersonaDescriptor {
    display_name: "Study Buddy",
    short_description: "Keeps you focused and explains things patiently.",
    base_instruction: "You are {name}, a study companion. You help the user \
        understand topics they are working on, quiz them when asked, and \
        keep explanations clear and encouraging. You celebrate small wins \
        and never make the user feel slow.",
};

const FRIEND: PersonaDescriptor = PersonaDescriptor {
    display_name: "Friend",
    short_description: "Easygoing company for everyday conversation.",
    base_instruction: "You are {name}, a friendly companion. You chat about \
        whatever is on the user's mind, share in their interests, and keep \
        the conversation light and genuine. You remember what matters to \
        them within this conversation.",
};

const CONFIDANT: PersonaDescriptor = PersonaDescriptor {
    display_name: "Confidant",
    short_description: "A calm listener for things that are hard to say.",
    base_instruction: "You are {name}, a trusted confidant. You listen \
        carefully, ask gentle questions, and never judge. You let the user \
        set the pace and you keep what they tell you in confidence.",
};

/// Descriptor for a persona. Exhaustive: every [`PersonaKind`] has an entry.
pub fn descriptor(kind: PersonaKind) -> &'static PersonaDescriptor {
    match kind {
        PersonaKind::StudyBuddy => &STUDY_BUDDY,
        PersonaKind::Friend => &FRIEND,
        PersonaKind::Confidant => &CONFIDANT,
    }
}

/// Fallible lookup for string input from the setup stage.
pub fn lookup(key: &str) -> Result<PersonaKind, CatalogError> {
    key.parse()
        .map_err(|_| CatalogError::UnknownPersona(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_persona_has_descriptor() {
        for kind in PersonaKind::ALL {
            let desc = descriptor(kind);
            assert!(!desc.display_name.is_empty());
            assert!(!desc.short_description.is_empty());
            assert!(desc.base_instruction.contains("{name}"));
        }
    }

    #[test]
    fn test_lookup_known_keys() {
        assert_eq!(lookup("study-buddy").unwrap(), PersonaKind::StudyBuddy);
        assert_eq!(lookup("friend").unwrap(), PersonaKind::Friend);
        assert_eq!(lookup("confidant").unwrap(), PersonaKind::Confidant);
    }

    #[test]
    fn test_lookup_unknown_key_fails() {
        let err = lookup("unknown").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownPersona(k) if k == "unknown"));
    }
}
