//! Compact navbar badge

use serde::Serialize;

use crate::leveling::{color_for_level, progress_for_xp, title_for_level, ColorToken};

/// View model for the compact level badge in the navbar
#[derive(Debug, Clone, Serialize)]
pub struct LevelBadge {
    pub level: u32,
    pub title: &'static str,
    pub color: ColorToken,
    /// Progress toward the next level, rounded to a whole percent
    pub percent: u8,
}

impl LevelBadge {
    pub fn for_xp(xp: u64) -> Self {
        let progress = progress_for_xp(xp);
        Self {
            level: progress.level,
            title: title_for_level(progress.level),
            color: color_for_level(progress.level),
            percent: progress.percentage.round() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leveling::{xp_cap, MAX_LEVEL};

    #[test]
    fn test_fresh_user_badge() {
        let badge = LevelBadge::for_xp(0);
        assert_eq!(badge.level, 1);
        assert_eq!(badge.title, "Novice");
        assert_eq!(badge.percent, 0);
    }

    #[test]
    fn test_capped_badge() {
        let badge = LevelBadge::for_xp(xp_cap() + 999);
        assert_eq!(badge.level, MAX_LEVEL);
        assert_eq!(badge.title, "Legend");
        assert_eq!(badge.percent, 100);
    }

    #[test]
    fn test_badge_serializes_color() {
        let badge = LevelBadge::for_xp(175);
        let json = serde_json::to_value(&badge).expect("serializable");
        assert_eq!(json["level"], 2);
        assert_eq!(json["percent"], 50);
        assert_eq!(json["color"]["start"], "#9ca3af");
    }
}
