//! Friendship progression counters.
//!
//! Tracks the current friendship level and the number of completed exchanges
//! since the last level-up. The conversation controller owns the advance
//! decision; this type only holds the counters.

use serde::{Deserialize, Serialize};

/// Progression state for a single conversation.
///
/// `current_level` starts at 1 and is monotonically non-decreasing, bounded
/// above by the catalog's highest level. `progress_count` counts completed
/// exchanges since the last advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub current_level: u32,
    pub progress_count: u32,
}

impl Progression {
    /// Fresh progression at level 1 with no completed exchanges.
    pub fn new() -> Self {
        Self {
            current_level: 1,
            progress_count: 0,
        }
    }

    /// Record one completed exchange.
    ///
    /// An exchange counts whether the reply streamed cleanly or was
    /// substituted with fallback text.
    pub fn record_exchange(&mut self) {
        self.progress_count += 1;
    }

    /// Advance to the next level and reset the exchange counter.
    pub fn advance(&mut self) {
        self.current_level += 1;
        self.progress_count = 0;
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_progression() {
        let p = Progression::new();
        assert_eq!(p.current_level, 1);
        assert_eq!(p.progress_count, 0);
    }

    #[test]
    fn test_record_exchange() {
        let mut p = Progression::new();
        p.record_exchange();
        p.record_exchange();
        assert_eq!(p.progress_count, 2);
        assert_eq!(p.current_level, 1);
    }

    #[test]
    fn test_advance_resets_count() {
        let mut p = Progression::new();
        for _ in 0..5 {
            p.record_exchange();
        }
        p.advance();
        assert_eq!(p.current_level, 2);
        assert_eq!(p.progress_count, 0);
    }
}
