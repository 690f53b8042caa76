//! Full profile stat block

use serde::Serialize;

use crate::leveling::{
    color_for_level, progress_for_xp, title_for_level, xp_for_next_level, ColorToken,
};
use crate::stats::UserStats;

/// View model for the profile page stat block
#[derive(Debug, Clone, Serialize)]
pub struct ProfileCard {
    pub level: u32,
    pub title: &'static str,
    pub color: ColorToken,
    pub total_xp: u64,
    pub progress_xp: u64,
    pub level_total_xp: u64,
    pub percentage: f32,
    /// XP remaining to the next level; absent at the level cap
    pub xp_to_next: Option<u64>,
}

impl ProfileCard {
    pub fn for_xp(xp: u64) -> Self {
        let progress = progress_for_xp(xp);
        Self {
            level: progress.level,
            title: title_for_level(progress.level),
            color: color_for_level(progress.level),
            total_xp: xp,
            progress_xp: progress.progress_xp,
            level_total_xp: progress.level_total_xp,
            percentage: progress.percentage,
            xp_to_next: xp_for_next_level(xp),
        }
    }

    pub fn for_stats(stats: &UserStats) -> Self {
        Self::for_xp(stats.xp)
    }

    /// Caption under the progress bar
    pub fn caption(&self) -> String {
        match self.xp_to_next {
            Some(remaining) => format!("{} XP to next level", remaining),
            None => "MAX LEVEL".to_string(),
        }
    }
}
