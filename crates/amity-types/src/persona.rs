use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::ProfileError;

/// The closed set of companion personalities.
///
/// Lookups against the catalog are exhaustive matches over this enum, so a
/// missing descriptor is a compile error rather than a runtime surprise.
/// String input from the setup stage goes through [`FromStr`], the only
/// fallible boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaKind {
    StudyBuddy,
    Friend,
    Confidant,
}

impl PersonaKind {
    /// All personas, in catalog display order.
    pub const ALL: [PersonaKind; 3] = [
        PersonaKind::StudyBuddy,
        PersonaKind::Friend,
        PersonaKind::Confidant,
    ];
}

impl fmt::Display for PersonaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonaKind::StudyBuddy => write!(f, "study-buddy"),
            PersonaKind::Friend => write!(f, "friend"),
            PersonaKind::Confidant => write!(f, "confidant"),
        }
    }
}

impl FromStr for PersonaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "study-buddy" => Ok(PersonaKind::StudyBuddy),
            "friend" => Ok(PersonaKind::Friend),
            "confidant" => Ok(PersonaKind::Confidant),
            other => Err(format!("invalid persona: '{other}'")),
        }
    }
}

/// A configured companion: display name plus personality.
///
/// Created once at setup and immutable afterward. The name is trimmed on
/// construction; an empty or whitespace-only name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionProfile {
    name: String,
    persona: PersonaKind,
}

impl CompanionProfile {
    /// Create a profile with a validated display name.
    pub fn new(name: &str, persona: PersonaKind) -> Result<Self, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            persona,
        })
    }

    /// The companion's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The companion's personality.
    pub fn persona(&self) -> PersonaKind {
        self.persona
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_kind_roundtrip() {
        for kind in PersonaKind::ALL {
            let s = kind.to_string();
            let parsed: PersonaKind = s.parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_persona_kind_serde() {
        let kind = PersonaKind::StudyBuddy;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"study-buddy\"");
        let parsed: PersonaKind = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, PersonaKind::StudyBuddy);
    }

    #[test]
    fn test_persona_kind_from_str_rejects_unknown() {
        assert!("mentor".parse::<PersonaKind>().is_err());
        assert!("".parse::<PersonaKind>().is_err());
    }

    #[test]
    fn test_profile_trims_name() {
        let profile = CompanionProfile::new("  Nova  ", PersonaKind::Friend).unwrap();
        assert_eq!(profile.name(), "Nova");
        assert_eq!(profile.persona(), PersonaKind::Friend);
    }

    #[test]
    fn test_profile_rejects_blank_name() {
        assert!(matches!(
            CompanionProfile::new("", PersonaKind::Friend),
            Err(ProfileError::EmptyName)
        ));
        assert!(matches!(
            CompanionProfile::new("   \t", PersonaKind::Confidant),
            Err(ProfileError::EmptyName)
        ));
    }
}
