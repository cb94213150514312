//! The friendship ladder.
//!
//! Five levels, ordered ascending. Each carries the number of completed
//! exchanges required to advance and a tone directive appended to the
//! companion's system instruction. The final level's threshold is
//! `u32::MAX`, which marks it terminal.

use amity_types::error::CatalogError;

/// Static description of one friendship level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FriendshipLevel {
    pub level: u32,
    pub display_name: &'static str,
    pub messages_to_advance: u32,
    pub tone_directive: &'static str,
}

const LADDER: [FriendshipLevel; 5] = [
    FriendshipLevel {
        level: 1,
        display_name: "Acquaintance",
        messages_to_advance: 5,
        tone_directive: "You have only just met the user. Be polite and a \
            little reserved; keep replies short and let them lead.",
    },
    FriendshipLevel {
        level: 2,
        display_name: "Buddy",
        messages_to_advance: 10,
        tone_directive: "You are getting comfortable with the user. Be \
            warmer and more casual, and refer back to things they have told \
            you.",
    },
    FriendshipLevel {
        level: 3,
        display_name: "Good Friend",
        messages_to_advance: 15,
        tone_directive: "You are good friends with the user. Joke around, \
            share opinions freely, and check in on how they are doing.",
    },
    FriendshipLevel {
        level: 4,
        display_name: "Close Friend",
        messages_to_advance: 25,
        tone_directive: "You are close friends with the user. Speak openly \
            and personally, and be honest with them even when it is \
            uncomfortable.",
    },
    FriendshipLevel {
        level: 5,
        display_name: "Kindred Spirit",
        // Terminal level: this threshold is never reached.
        messages_to_advance: u32::MAX,
        tone_directive: "You and the user understand each other completely. \
            Talk like someone who has known them for years, with total ease \
            and familiarity.",
    },
];

/// The highest friendship level in the catalog.
pub fn max_level() -> u32 {
    LADDER[LADDER.len() - 1].level
}

/// Descriptor for a friendship level.
///
/// Fails with [`CatalogError::LevelOutOfRange`] for `level < 1` or
/// `level > max_level()`.
pub fn level_descriptor(level: u32) -> Result<&'static FriendshipLevel, CatalogError> {
    if level < 1 || level > max_level() {
        return Err(CatalogError::LevelOutOfRange {
            level,
            max: max_level(),
        });
    }
    Ok(&LADDER[(level - 1) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_is_ordered_from_one() {
        for (i, entry) in LADDER.iter().enumerate() {
            assert_eq!(entry.level, (i + 1) as u32);
            assert!(entry.messages_to_advance > 0);
            assert!(!entry.display_name.is_empty());
            assert!(!entry.tone_directive.is_empty());
        }
    }

    #[test]
    fn test_level_descriptor_bounds() {
        assert!(matches!(
            level_descriptor(0),
            Err(CatalogError::LevelOutOfRange { level: 0, max: 5 })
        ));
        assert!(matches!(
            level_descriptor(6),
            Err(CatalogError::LevelOutOfRange { level: 6, max: 5 })
        ));
        assert!(level_descriptor(1).is_ok());
        assert!(level_descriptor(5).is_ok());
    }

    #[test]
    fn test_level_one_threshold() {
        let first = level_descriptor(1).unwrap();
        assert_eq!(first.messages_to_advance, 5);
    }

    #[test]
    fn test_terminal_level_is_unreachable() {
        let last = level_descriptor(max_level()).unwrap();
        assert_eq!(last.messages_to_advance, u32::MAX);
    }
}
