//! Normalized user stats
//!
//! The backend has historically served the XP total under two field names
//! (`xp` on newer endpoints, `total_xp` on older ones). Normalize once at
//! the API boundary so every consumer reads one canonical field instead of
//! carrying fallback chains.

use serde::{Deserialize, Serialize};

use crate::leveling::{level_for_xp, progress_for_xp, title_for_level, LevelProgress};

/// Canonical per-user progression stats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub username: String,
    /// Lifetime XP total. Awarded externally (project completions); this
    /// crate never writes it back.
    #[serde(alias = "total_xp")]
    pub xp: u64,
}

impl UserStats {
    pub fn new(username: impl Into<String>, xp: u64) -> Self {
        Self {
            username: username.into(),
            xp,
        }
    }

    pub fn level(&self) -> u32 {
        level_for_xp(self.xp)
    }

    pub fn title(&self) -> &'static str {
        title_for_level(self.level())
    }

    pub fn progress(&self) -> LevelProgress {
        progress_for_xp(self.xp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_new_field_name() {
        let stats: UserStats = serde_json::from_str(r#"{"username":"ada","xp":1200}"#)
            .expect("valid payload");
        assert_eq!(stats.xp, 1200);
    }

    #[test]
    fn test_deserialize_legacy_field_name() {
        let stats: UserStats = serde_json::from_str(r#"{"username":"ada","total_xp":1200}"#)
            .expect("valid payload");
        assert_eq!(stats.xp, 1200);
    }

    #[test]
    fn test_derived_accessors() {
        let stats = UserStats::new("ada", 250);
        assert_eq!(stats.level(), 3);
        assert_eq!(stats.title(), "Novice");
        assert_eq!(stats.progress().progress_xp, 0);
    }
}
