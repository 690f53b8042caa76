//! Level-up toast

use serde::Serialize;

use crate::leveling::{color_for_level, level_for_xp, title_for_level, ColorToken};

/// View model for the level-up announcement toast
#[derive(Debug, Clone, Serialize)]
pub struct LevelUpToast {
    pub old_level: u32,
    pub new_level: u32,
    pub title: &'static str,
    pub color: ColorToken,
    /// Set when the level-up also crossed into a new tier title
    pub new_tier: bool,
}

impl LevelUpToast {
    /// Build a toast if growing from `old_xp` to `new_xp` crossed at least
    /// one level boundary. XP totals are lifetime-monotonic; a shrinking
    /// total is a caller bug and produces no toast.
    pub fn between(old_xp: u64, new_xp: u64) -> Option<Self> {
        if new_xp < old_xp {
            log::warn!("XP total decreased from {} to {}", old_xp, new_xp);
            return None;
        }

        let old_level = level_for_xp(old_xp);
        let new_level = level_for_xp(new_xp);
        if new_level <= old_level {
            return None;
        }

        Some(Self {
            old_level,
            new_level,
            title: title_for_level(new_level),
            color: color_for_level(new_level),
            new_tier: title_for_level(old_level) != title_for_level(new_level),
        })
    }

    /// Announcement copy for the toast body
    pub fn message(&self) -> String {
        format!("Level up! You reached level {} ({})", self.new_level, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leveling::xp_to_enter;

    #[test]
    fn test_no_toast_without_level_up() {
        assert!(LevelUpToast::between(0, 0).is_none());
        assert!(LevelUpToast::between(0, 99).is_none());
        assert!(LevelUpToast::between(150, 200).is_none());
    }

    #[test]
    fn test_toast_on_single_level_up() {
        let toast = LevelUpToast::between(90, 100).expect("crossed into level 2");
        assert_eq!(toast.old_level, 1);
        assert_eq!(toast.new_level, 2);
        assert_eq!(toast.title, "Novice");
        assert!(!toast.new_tier);
        assert_eq!(toast.message(), "Level up! You reached level 2 (Novice)");
    }

    #[test]
    fn test_toast_spanning_multiple_levels() {
        let toast = LevelUpToast::between(0, xp_to_enter(5)).expect("crossed several levels");
        assert_eq!(toast.old_level, 1);
        assert_eq!(toast.new_level, 5);
    }

    #[test]
    fn test_toast_flags_tier_change() {
        let into_tier = LevelUpToast::between(xp_to_enter(9), xp_to_enter(10))
            .expect("crossed into level 10");
        assert_eq!(into_tier.title, "Apprentice");
        assert!(into_tier.new_tier);
    }

    #[test]
    fn test_shrinking_xp_produces_no_toast() {
        assert!(LevelUpToast::between(500, 100).is_none());
    }
}
